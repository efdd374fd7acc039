pub mod dto;
pub mod envelope;

pub mod prelude {
    // --- Envelope ---
    pub use crate::envelope::{Envelope, Page, PageParams};

    // --- Projects ---
    pub use crate::dto::environment::{
        EnvVariable, EnvVariableCreate, EnvVariableUpdate, Environment, EnvironmentCreate,
        EnvironmentDetail, EnvironmentUpdate,
    };
    pub use crate::dto::module::{Module, ModuleCreate, ModuleNode, ModuleUpdate};
    pub use crate::dto::project::{Project, ProjectCreate, ProjectSummary, ProjectUpdate};

    // --- Cases & Suites ---
    pub use crate::dto::case::{
        Assertion, AssertionCreate, AssertionUpdate, Extractor, ExtractorCreate, ExtractorUpdate,
        TestCase, TestCaseCreate, TestCaseDetail, TestCaseSummary, TestCaseUpdate,
    };
    pub use crate::dto::suite::{
        SuiteCase, SuiteCaseCreate, SuiteCaseDetail, SuiteCaseOrder, SuiteCaseOrderUpdate,
        TestSuite, TestSuiteCreate, TestSuiteDetail, TestSuiteSummary, TestSuiteUpdate,
    };

    // --- Schedules & Executions ---
    pub use crate::dto::execution::{
        CaseRunResult, DebugRequest, DebugResult, ExecuteCaseRequest, ExecuteSuiteRequest,
        Execution, ExecutionDetail, ExecutionQuery, ExecutionStep, ExecutionSummary, RunStatus,
    };
    pub use crate::dto::schedule::{
        Schedule, ScheduleCreate, ScheduleQuery, ScheduleSummary, ScheduleToggle, ScheduleUpdate,
    };

    // --- Statistics ---
    pub use crate::dto::stats::{
        DashboardStats, FailureCase, ProjectTrend, SuiteHistory, SuiteRun, TopFailures,
        TopFailuresQuery, TrendPoint,
    };
}
