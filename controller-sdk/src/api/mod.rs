//! Wire shapes for the controller API: passive value objects with no
//! behavior beyond serialization and display formatting.

mod apps;
mod config;
mod limits;
mod pods;
mod volumes;

pub use apps::{App, AppCreateRequest, AppLogsRequest, AppRunRequest, AppUpdateRequest};
pub use config::{
    Config, ConfigInfo, ConfigSet, ConfigTags, ConfigUnset, ConfigValue, ConfigVar,
    ContainerProbe, ExecAction, GrpcAction, Healthcheck, HttpGetAction, KvPair, Lifecycle,
    LifecycleHandler, PtypeValue, SleepAction, TcpSocketAction, ValuesRefs,
};
pub use limits::{LimitPlan, LimitSpec};
pub use pods::{Command, ContainerState, Pod, PodIds, PodLogsRequest, PodState, PodType};
pub use volumes::{Mount, Unmount, Volume};
