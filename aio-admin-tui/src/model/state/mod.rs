//! 页面数据状态

mod account_form;
mod accounts;
mod debug;
mod modal;
mod model_form;
mod models;
mod search;
mod settings;
mod toast;

pub use account_form::{AccountField, AccountForm};
pub use accounts::AccountsState;
pub use debug::{DebugState, ModelDropdown};
pub use modal::{DeleteTarget, Modal, ModalState};
pub use model_form::{AssociationField, ModelForm, ModelFormFocus};
pub use models::ModelsState;
pub use search::SearchBox;
pub use settings::{SettingItem, SettingsState};
pub use toast::{Toast, ToastKind};
