//! 弹窗状态

use super::{AccountForm, ModelForm};

/// 删除目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Account(i64),
    Model(i64),
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 添加/编辑账户
    AccountForm(AccountForm),
    /// 添加/编辑模型
    ModelForm(ModelForm),
    /// 确认删除
    ConfirmDelete {
        target: DeleteTarget,
        /// 项目名称
        item_name: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助信息
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示确认删除弹窗
    pub fn show_confirm_delete(&mut self, target: DeleteTarget, item_name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            target,
            item_name: item_name.to_string(),
            focus: 0,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn account_form_mut(&mut self) -> Option<&mut AccountForm> {
        match self.active.as_mut() {
            Some(Modal::AccountForm(form)) => Some(form),
            _ => None,
        }
    }

    pub fn model_form_mut(&mut self) -> Option<&mut ModelForm> {
        match self.active.as_mut() {
            Some(Modal::ModelForm(form)) => Some(form),
            _ => None,
        }
    }
}
