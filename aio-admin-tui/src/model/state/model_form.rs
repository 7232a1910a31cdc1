//! 模型表单（含关联模型选择）

use aio_admin_core::association::{build_universe, AssociationSelector};
use aio_admin_core::types::{DebugModel, Model, ModelPayload, ModelProvider};
use aio_admin_core::validation::normalize_model_id;
use aio_admin_core::ValidationError;

/// 关联模型区域的加载状态
#[derive(Debug, Clone)]
pub enum AssociationField {
    Loading,
    Failed,
    Ready(AssociationSelector),
}

/// 模型表单焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormFocus {
    ModelId,
    Provider,
    Enabled,
    /// 关联模型搜索框
    AssocSearch,
    /// 关联模型列表（第 0 行是自定义行）
    AssocList,
    /// 自定义模式下的文本输入
    CustomInput,
}

/// 添加/编辑模型表单
#[derive(Debug, Clone)]
pub struct ModelForm {
    /// 打开序号，用于丢弃旧表单的关联模型加载结果
    pub serial: u64,
    pub editing_id: Option<i64>,
    pub model_id: String,
    pub provider: ModelProvider,
    pub enabled: bool,
    /// 打开表单时已保存的关联模型
    pub stored_associations: Vec<String>,
    pub association: AssociationField,
    pub focus: ModelFormFocus,
    /// 关联列表光标：0 为自定义行，其后依次为可见行
    pub cursor: usize,
    /// 校验或提交失败的提示（已翻译）
    pub error: Option<String>,
    pub submitting: bool,
}

impl ModelForm {
    pub fn create(serial: u64) -> Self {
        Self {
            serial,
            editing_id: None,
            model_id: String::new(),
            provider: ModelProvider::default(),
            enabled: true,
            stored_associations: Vec::new(),
            association: AssociationField::Loading,
            focus: ModelFormFocus::ModelId,
            cursor: 0,
            error: None,
            submitting: false,
        }
    }

    pub fn edit(serial: u64, model: &Model) -> Self {
        Self {
            editing_id: Some(model.id),
            model_id: model.model_id.clone(),
            provider: model.provider,
            enabled: model.enabled,
            stored_associations: model.ass_model_ids.clone(),
            focus: ModelFormFocus::Provider,
            ..Self::create(serial)
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn selector(&self) -> Option<&AssociationSelector> {
        match &self.association {
            AssociationField::Ready(selector) => Some(selector),
            _ => None,
        }
    }

    fn selector_mut(&mut self) -> Option<&mut AssociationSelector> {
        match &mut self.association {
            AssociationField::Ready(selector) => Some(selector),
            _ => None,
        }
    }

    /// 关联模型全集到达：去掉正在编辑的模型本身
    pub fn apply_universe(&mut self, models: &[DebugModel]) {
        let universe = build_universe(models.iter().map(|m| m.id.as_str()), &self.model_id);
        self.association =
            AssociationField::Ready(AssociationSelector::open(universe, &self.stored_associations));
        self.cursor = 0;
    }

    pub fn fail_universe(&mut self) {
        self.association = AssociationField::Failed;
        if matches!(
            self.focus,
            ModelFormFocus::AssocSearch | ModelFormFocus::AssocList | ModelFormFocus::CustomInput
        ) {
            self.focus = self.focus_order()[0];
        }
    }

    /// 当前可获得焦点的字段顺序
    pub fn focus_order(&self) -> Vec<ModelFormFocus> {
        let mut order = Vec::with_capacity(5);
        if !self.is_editing() {
            order.push(ModelFormFocus::ModelId);
        }
        order.push(ModelFormFocus::Provider);
        order.push(ModelFormFocus::Enabled);
        if let Some(selector) = self.selector() {
            if selector.is_custom_mode() {
                order.push(ModelFormFocus::AssocList);
                order.push(ModelFormFocus::CustomInput);
            } else {
                order.push(ModelFormFocus::AssocSearch);
                order.push(ModelFormFocus::AssocList);
            }
        }
        order
    }

    pub fn next_field(&mut self) {
        let order = self.focus_order();
        self.focus = match order.iter().position(|f| *f == self.focus) {
            Some(pos) => order[(pos + 1) % order.len()],
            None => order[0],
        };
    }

    pub fn prev_field(&mut self) {
        let order = self.focus_order();
        self.focus = match order.iter().position(|f| *f == self.focus) {
            Some(pos) => order[(pos + order.len() - 1) % order.len()],
            None => order[0],
        };
    }

    /// 关联列表的行数（含自定义行）
    fn list_len(&self) -> usize {
        self.selector().map_or(1, |s| s.visible_indices().len() + 1)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.list_len() {
            self.cursor += 1;
        }
    }

    /// 勾选/取消光标所在行；勾选自定义行时焦点移到自定义输入框
    pub fn toggle_at_cursor(&mut self) {
        let cursor = self.cursor;
        let Some(selector) = self.selector_mut() else {
            return;
        };
        if cursor == 0 {
            selector.toggle_custom();
            let custom = selector.is_custom_mode();
            if custom {
                self.focus = ModelFormFocus::CustomInput;
            }
            return;
        }
        if let Some(&index) = selector.visible_indices().get(cursor - 1) {
            selector.toggle_row(index);
        }
    }

    pub fn select_all(&mut self) {
        if let Some(selector) = self.selector_mut() {
            selector.select_all();
        }
    }

    pub fn cycle_next(&mut self) {
        match self.focus {
            ModelFormFocus::Provider => self.provider = self.provider.next(),
            ModelFormFocus::Enabled => self.enabled = !self.enabled,
            _ => {}
        }
    }

    pub fn cycle_prev(&mut self) {
        match self.focus {
            ModelFormFocus::Provider => self.provider = self.provider.prev(),
            ModelFormFocus::Enabled => self.enabled = !self.enabled,
            _ => {}
        }
    }

    pub fn input(&mut self, c: char) {
        match self.focus {
            ModelFormFocus::ModelId if !self.is_editing() => self.model_id.push(c),
            ModelFormFocus::AssocSearch => {
                if let Some(selector) = self.selector_mut() {
                    let query = format!("{}{c}", selector.search());
                    selector.set_search(query);
                }
                self.clamp_cursor();
            }
            ModelFormFocus::CustomInput => {
                if let Some(selector) = self.selector_mut() {
                    selector.push_custom_char(c);
                }
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            ModelFormFocus::ModelId if !self.is_editing() => {
                self.model_id.pop();
            }
            ModelFormFocus::AssocSearch => {
                if let Some(selector) = self.selector_mut() {
                    let mut query = selector.search().to_string();
                    query.pop();
                    selector.set_search(query);
                }
                self.clamp_cursor();
            }
            ModelFormFocus::CustomInput => {
                if let Some(selector) = self.selector_mut() {
                    selector.pop_custom_char();
                }
            }
            _ => {}
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.list_len();
        if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// 提交前校验：先规范化模型 ID，再校验关联模型
    pub fn build_payload(&self) -> Result<ModelPayload, ValidationError> {
        let model_id = normalize_model_id(&self.model_id)?;
        let ass_model_ids = self
            .selector()
            .ok_or(ValidationError::AssociationRequired)?
            .validate()?;

        Ok(ModelPayload {
            model_id,
            ass_model_ids,
            provider: self.provider,
            enabled: self.enabled,
        })
    }
}
