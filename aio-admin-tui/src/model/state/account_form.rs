//! 账户表单

use aio_admin_core::types::{Account, AccountPayload};
use aio_admin_core::validation::validate_base_url;
use aio_admin_core::ValidationError;

/// 账户表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Name,
    BaseUrl,
    ApiKey,
    Ext,
}

/// 添加/编辑账户表单
#[derive(Debug, Clone)]
pub struct AccountForm {
    /// 编辑时的账户 ID，添加时为 None
    pub editing_id: Option<i64>,
    /// 编辑时正在拉取账户详情
    pub loading: bool,
    pub name: String,
    pub base_url: String,
    pub api_key: String,
    pub ext: String,
    /// 编辑时沿用已加载的启用状态
    pub enabled: bool,
    pub focus: AccountField,
    /// API Key 是否明文显示
    pub show_secret: bool,
    /// 校验或提交失败的提示（已翻译）
    pub error: Option<String>,
    /// 提交请求在途
    pub submitting: bool,
}

impl AccountForm {
    /// 空白的添加表单
    pub fn create() -> Self {
        Self {
            editing_id: None,
            loading: false,
            name: String::new(),
            base_url: String::new(),
            api_key: String::new(),
            ext: String::new(),
            enabled: true,
            focus: AccountField::Name,
            show_secret: false,
            error: None,
            submitting: false,
        }
    }

    /// 编辑表单，内容等待 GET 返回后填充
    pub fn edit(id: i64) -> Self {
        Self {
            editing_id: Some(id),
            loading: true,
            focus: AccountField::BaseUrl,
            ..Self::create()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// 用服务端返回的账户填充表单
    pub fn fill(&mut self, account: Account) {
        self.name = account.name;
        self.base_url = account.base_url;
        self.api_key = account.api_key;
        self.ext = account.ext;
        self.enabled = account.enabled;
        self.loading = false;
    }

    /// 可获得焦点的字段；编辑时名称只读
    pub fn fields(&self) -> &'static [AccountField] {
        if self.is_editing() {
            &[AccountField::BaseUrl, AccountField::ApiKey, AccountField::Ext]
        } else {
            &[
                AccountField::Name,
                AccountField::BaseUrl,
                AccountField::ApiKey,
                AccountField::Ext,
            ]
        }
    }

    pub fn next_field(&mut self) {
        let fields = self.fields();
        self.focus = match fields.iter().position(|f| *f == self.focus) {
            Some(pos) => fields[(pos + 1) % fields.len()],
            None => fields[0],
        };
    }

    pub fn prev_field(&mut self) {
        let fields = self.fields();
        self.focus = match fields.iter().position(|f| *f == self.focus) {
            Some(pos) => fields[(pos + fields.len() - 1) % fields.len()],
            None => fields[0],
        };
    }

    fn focused_value(&mut self) -> Option<&mut String> {
        if self.loading {
            return None;
        }
        match self.focus {
            AccountField::Name if self.is_editing() => None,
            AccountField::Name => Some(&mut self.name),
            AccountField::BaseUrl => Some(&mut self.base_url),
            AccountField::ApiKey => Some(&mut self.api_key),
            AccountField::Ext => Some(&mut self.ext),
        }
    }

    pub fn input(&mut self, c: char) {
        if let Some(value) = self.focused_value() {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.focused_value() {
            value.pop();
        }
    }

    /// 校验并生成提交内容
    pub fn build_payload(&self) -> Result<AccountPayload, ValidationError> {
        let name = self.name.trim();
        if !self.is_editing() && name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let base_url = validate_base_url(&self.base_url)?;

        Ok(AccountPayload {
            name: name.to_string(),
            base_url,
            api_key: self.api_key.trim().to_string(),
            ext: self.ext.clone(),
            enabled: self.enabled,
        })
    }
}
