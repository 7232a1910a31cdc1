//! 后端请求完成事件

use aio_admin_core::types::{Account, AccountPage, DebugModel, Model};
use aio_admin_core::CoreResult;

/// 后端请求完成事件
///
/// 每个变体携带一次请求的结果，由 RegistryService 在任务结束时发送。
#[derive(Debug, Clone)]
pub enum ApiEvent {
    AccountsLoaded(CoreResult<AccountPage>),
    /// 编辑账户前的详情拉取
    AccountFetched(CoreResult<Account>),
    AccountCreated(CoreResult<()>),
    AccountUpdated(CoreResult<()>),
    AccountDeleted(CoreResult<()>),
    AccountToggled(CoreResult<Account>),

    ModelsLoaded(CoreResult<Vec<Model>>),
    ModelSaved {
        is_update: bool,
        result: CoreResult<()>,
    },
    ModelDeleted(CoreResult<()>),
    ModelToggled(CoreResult<()>),

    /// 模型表单的关联模型全集
    AssociationUniverseLoaded {
        serial: u64,
        result: CoreResult<Vec<DebugModel>>,
    },

    DebugModelsLoaded(CoreResult<Vec<DebugModel>>),
    DebugReloadTriggered(CoreResult<()>),
    /// 触发缓存刷新后的等待结束
    DebugReloadWaitElapsed,
}
