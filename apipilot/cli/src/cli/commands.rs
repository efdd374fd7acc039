use anyhow::Result;
use apipilot_client::routes::{self, ROUTES};
use apipilot_client::ApiClient;
use apipilot_proto::prelude::*;
use clap::{Args, Subcommand};

use super::Output;
use crate::table::{
    AssertionRow, CaseRow, EnvironmentRow, ExecutionRow, FailureRow, KeyValueRow, ModuleRow,
    ProjectRow, RouteRow, ScheduleRow, StepRow, SuiteCaseRow, SuiteRow, SuiteRunRow, TrendRow,
};

#[derive(Args, Default, Debug, Clone, Copy)]
pub struct Paging {
    /// Page number, starting at 1
    #[arg(long)]
    page: Option<u32>,

    /// Rows per page
    #[arg(long)]
    page_size: Option<u32>,
}

impl From<Paging> for PageParams {
    fn from(p: Paging) -> Self {
        PageParams {
            page: p.page,
            page_size: p.page_size,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dashboard counters
    #[command(visible_aliases = ["dash", "d"])]
    Dashboard,

    /// Manage projects, their modules and environments
    #[command(subcommand, visible_aliases = ["p"])]
    Project(ProjectCommand),

    /// Inspect and run test cases
    #[command(subcommand, visible_aliases = ["c"])]
    Case(CaseCommand),

    /// Manage test suites
    #[command(subcommand, visible_aliases = ["s"])]
    Suite(SuiteCommand),

    /// Manage scheduled suite runs
    #[command(subcommand, visible_aliases = ["cron"])]
    Schedule(ScheduleCommand),

    /// Browse execution history
    #[command(subcommand, visible_aliases = ["x"])]
    Execution(ExecutionCommand),

    /// Trends and failure statistics
    #[command(subcommand)]
    Stats(StatsCommand),

    /// Print the web UI route table
    Routes,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    #[command(visible_aliases = ["ls"])]
    List {
        #[command(flatten)]
        paging: Paging,
    },
    Show {
        id: i64,
    },
    Create {
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    #[command(visible_aliases = ["rm"])]
    Delete {
        id: i64,
    },
    /// Print the module tree of a project
    Modules {
        id: i64,
    },
    /// List the environments of a project
    #[command(visible_aliases = ["envs"])]
    Environments {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum CaseCommand {
    /// List the cases of a module
    #[command(visible_aliases = ["ls"])]
    List {
        module_id: i64,
        #[command(flatten)]
        paging: Paging,
    },
    Show {
        id: i64,
    },
    /// Duplicate a case inside its module
    Copy {
        id: i64,
    },
    #[command(visible_aliases = ["rm"])]
    Delete {
        id: i64,
    },
    /// Execute a single case against an environment
    Run {
        id: i64,
        #[arg(short, long = "env")]
        environment: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum SuiteCommand {
    #[command(visible_aliases = ["ls"])]
    List {
        /// Only suites of this project
        #[arg(short, long)]
        project: Option<i64>,
        #[command(flatten)]
        paging: Paging,
    },
    Show {
        id: i64,
    },
    Create {
        name: String,
        #[arg(short, long)]
        project: i64,
        #[arg(short, long)]
        description: Option<String>,
        /// Run cases in parallel instead of one after another
        #[arg(long)]
        parallel: bool,
    },
    #[command(visible_aliases = ["rm"])]
    Delete {
        id: i64,
    },
    /// Attach a case at the end of the suite
    Add {
        id: i64,
        case_id: i64,
    },
    /// Detach a case from the suite
    Remove {
        id: i64,
        case_id: i64,
    },
    /// Rewrite the case order; positions follow the order given
    Reorder {
        id: i64,
        #[arg(required = true)]
        case_ids: Vec<i64>,
    },
    /// Execute the suite against an environment
    Run {
        id: i64,
        #[arg(short, long = "env")]
        environment: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    #[command(visible_aliases = ["ls"])]
    List {
        #[arg(long)]
        suite: Option<i64>,
        #[arg(long)]
        active: Option<bool>,
        #[command(flatten)]
        paging: Paging,
    },
    Show {
        id: i64,
    },
    Enable {
        id: i64,
    },
    Disable {
        id: i64,
    },
    #[command(visible_aliases = ["rm"])]
    Delete {
        id: i64,
    },
    /// Trigger the schedule immediately
    Run {
        id: i64,
    },
    /// Executions started by the schedule
    History {
        id: i64,
        #[command(flatten)]
        paging: Paging,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExecutionCommand {
    #[command(visible_aliases = ["ls"])]
    List {
        #[arg(long)]
        suite: Option<i64>,
        #[arg(long)]
        case: Option<i64>,
        /// pending, running, passed, failed, error
        #[arg(long)]
        status: Option<String>,
        /// manual, schedule
        #[arg(long)]
        trigger: Option<String>,
        #[command(flatten)]
        paging: Paging,
    },
    /// Show an execution with its per-case steps
    Show {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum StatsCommand {
    /// Daily totals of a project
    Trend {
        project: i64,
        #[arg(long)]
        days: Option<u32>,
    },
    /// Cases failing most often
    Failures {
        #[arg(long)]
        project: Option<i64>,
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Recent runs of a suite
    SuiteHistory {
        suite: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
}

impl Commands {
    /// Determines whether this command should have a timeout applied.
    /// Runs wait for the backend to finish executing, so they are left unbounded.
    pub fn should_timeout(&self) -> bool {
        match self {
            Commands::Case(CaseCommand::Run { .. }) => false,
            Commands::Suite(SuiteCommand::Run { .. }) => false,
            Commands::Schedule(ScheduleCommand::Run { .. }) => false,
            _ => true,
        }
    }

    pub async fn run(&self, api: &ApiClient, out: &Output) -> Result<()> {
        match self {
            Commands::Dashboard => {
                let stats = api.get_dashboard_stats().await?;
                let rows = vec![
                    KeyValueRow::new("Projects", stats.project_count),
                    KeyValueRow::new("Cases", stats.case_count),
                    KeyValueRow::new("Suites", stats.suite_count),
                    KeyValueRow::new("Executions today", stats.today_execution_count),
                    KeyValueRow::new("Passed today", stats.today_passed),
                    KeyValueRow::new("Failed today", stats.today_failed),
                    KeyValueRow::new("Pass rate", format!("{:.1}%", stats.overall_pass_rate)),
                    KeyValueRow::new("Total executions", stats.total_executions),
                ];
                out.list(&stats, rows)
            }
            Commands::Project(cmd) => cmd.run(api, out).await,
            Commands::Case(cmd) => cmd.run(api, out).await,
            Commands::Suite(cmd) => cmd.run(api, out).await,
            Commands::Schedule(cmd) => cmd.run(api, out).await,
            Commands::Execution(cmd) => cmd.run(api, out).await,
            Commands::Stats(cmd) => cmd.run(api, out).await,
            Commands::Routes => {
                let titles: Vec<_> = ROUTES
                    .iter()
                    .map(|r| (r.full_path(), routes::document_title(Some(&r.meta))))
                    .collect();
                out.list(&titles, ROUTES.iter().map(RouteRow::from))
            }
        }
    }
}

impl ProjectCommand {
    async fn run(&self, api: &ApiClient, out: &Output) -> Result<()> {
        match self {
            ProjectCommand::List { paging } => {
                let page = api.get_projects(&(*paging).into()).await?;
                out.list(&page, page.items.iter().map(ProjectRow::from))
            }
            ProjectCommand::Show { id } => {
                let project = api.get_project(*id).await?;
                let rows = vec![
                    KeyValueRow::new("ID", project.id),
                    KeyValueRow::new("Name", &project.name),
                    KeyValueRow::new("Description", project.description.as_deref().unwrap_or("-")),
                    KeyValueRow::new("Created", project.created_at),
                    KeyValueRow::new("Updated", project.updated_at),
                ];
                out.list(&project, rows)
            }
            ProjectCommand::Create { name, description } => {
                let project = api
                    .create_project(&ProjectCreate {
                        name: name.clone(),
                        description: description.clone(),
                    })
                    .await?;
                out.json(&project)
            }
            ProjectCommand::Delete { id } => {
                api.delete_project(*id).await?;
                out.done(&format!("project {id} deleted"));
                Ok(())
            }
            ProjectCommand::Modules { id } => {
                let tree = api.get_project_modules(*id).await?;
                out.list(&tree, ModuleRow::tree(&tree))
            }
            ProjectCommand::Environments { id } => {
                let envs = api.get_project_environments(*id).await?;
                out.list(&envs, envs.iter().map(EnvironmentRow::from))
            }
        }
    }
}

impl CaseCommand {
    async fn run(&self, api: &ApiClient, out: &Output) -> Result<()> {
        match self {
            CaseCommand::List { module_id, paging } => {
                let page = api.get_module_cases(*module_id, &(*paging).into()).await?;
                out.list(&page, page.items.iter().map(CaseRow::from))
            }
            CaseCommand::Show { id } => {
                let detail = api.get_case(*id).await?;
                out.list(&detail, detail.assertions.iter().map(AssertionRow::from))
            }
            CaseCommand::Copy { id } => {
                let copy = api.copy_case(*id).await?;
                out.done(&format!("case {id} copied as {}", copy.id));
                Ok(())
            }
            CaseCommand::Delete { id } => {
                api.delete_case(*id).await?;
                out.done(&format!("case {id} deleted"));
                Ok(())
            }
            CaseCommand::Run { id, environment } => {
                let result = api
                    .execute_case(&ExecuteCaseRequest {
                        test_case_id: *id,
                        environment_id: *environment,
                    })
                    .await?;
                let rows = vec![
                    KeyValueRow::new("Execution", result.execution_id),
                    KeyValueRow::new("Status", &result.status),
                    KeyValueRow::new(
                        "HTTP",
                        result
                            .response_status_code
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    ),
                    KeyValueRow::new("Error", &result.error_message),
                ];
                out.list(&result, rows)
            }
        }
    }
}

impl SuiteCommand {
    async fn run(&self, api: &ApiClient, out: &Output) -> Result<()> {
        match self {
            SuiteCommand::List { project, paging } => {
                let params: PageParams = (*paging).into();
                let page = match project {
                    Some(project_id) => api.get_project_suites(*project_id, &params).await?,
                    None => api.get_suites(&params).await?,
                };
                out.list(&page, page.items.iter().map(SuiteRow::from))
            }
            SuiteCommand::Show { id } => {
                let mut detail = api.get_suite(*id).await?;
                detail.cases.sort_by_key(|c| c.sort_order);
                out.list(&detail, detail.cases.iter().map(SuiteCaseRow::from))
            }
            SuiteCommand::Create {
                name,
                project,
                description,
                parallel,
            } => {
                let mut data = TestSuiteCreate::new(name.as_str());
                data.description = description.clone();
                if *parallel {
                    data.execution_mode = "parallel".to_string();
                }
                let suite = api.create_project_suite(*project, &data).await?;
                out.json(&suite)
            }
            SuiteCommand::Delete { id } => {
                api.delete_suite(*id).await?;
                out.done(&format!("suite {id} deleted"));
                Ok(())
            }
            SuiteCommand::Add { id, case_id } => {
                let existing = api.get_suite_cases(*id).await?;
                let next = existing.iter().map(|c| c.sort_order + 1).max().unwrap_or(0);
                let added = api
                    .add_case_to_suite(
                        *id,
                        &SuiteCaseCreate {
                            test_case_id: *case_id,
                            sort_order: next,
                        },
                    )
                    .await?;
                out.json(&added)
            }
            SuiteCommand::Remove { id, case_id } => {
                api.remove_case_from_suite(*id, *case_id).await?;
                out.done(&format!("case {case_id} removed from suite {id}"));
                Ok(())
            }
            SuiteCommand::Reorder { id, case_ids } => {
                api.update_suite_cases_order(*id, &SuiteCaseOrderUpdate::from_ids(case_ids))
                    .await?;
                out.done(&format!("suite {id} reordered"));
                Ok(())
            }
            SuiteCommand::Run { id, environment } => {
                let execution = api.execute_suite_by_id(*id, *environment).await?;
                out.list(&execution, execution_rows(&execution))
            }
        }
    }
}

impl ScheduleCommand {
    async fn run(&self, api: &ApiClient, out: &Output) -> Result<()> {
        match self {
            ScheduleCommand::List {
                suite,
                active,
                paging,
            } => {
                let query = ScheduleQuery {
                    suite_id: *suite,
                    is_active: *active,
                    page: paging.page,
                    page_size: paging.page_size,
                };
                let page = api.get_schedules(&query).await?;
                out.list(&page, page.items.iter().map(ScheduleRow::from))
            }
            ScheduleCommand::Show { id } => {
                let schedule = api.get_schedule(*id).await?;
                let rows = vec![
                    KeyValueRow::new("ID", schedule.id),
                    KeyValueRow::new("Name", &schedule.name),
                    KeyValueRow::new("Suite", schedule.suite_id),
                    KeyValueRow::new("Environment", schedule.environment_id),
                    KeyValueRow::new("Cron", &schedule.cron_expression),
                    KeyValueRow::new("Active", schedule.is_active),
                    KeyValueRow::new("Notify", schedule.notify_list().join(", ")),
                ];
                out.list(&schedule, rows)
            }
            ScheduleCommand::Enable { id } | ScheduleCommand::Disable { id } => {
                let enable = matches!(self, ScheduleCommand::Enable { .. });
                let schedule = api.toggle_schedule(*id, enable).await?;
                let state = if schedule.is_active { "enabled" } else { "disabled" };
                out.done(&format!("schedule {id} {state}"));
                Ok(())
            }
            ScheduleCommand::Delete { id } => {
                api.delete_schedule(*id).await?;
                out.done(&format!("schedule {id} deleted"));
                Ok(())
            }
            ScheduleCommand::Run { id } => {
                let execution = api.run_schedule_now(*id).await?;
                out.list(&execution, execution_rows(&execution))
            }
            ScheduleCommand::History { id, paging } => {
                let page = api.get_schedule_history(*id, &(*paging).into()).await?;
                out.list(&page, page.items.iter().map(ExecutionRow::from))
            }
        }
    }
}

impl ExecutionCommand {
    async fn run(&self, api: &ApiClient, out: &Output) -> Result<()> {
        match self {
            ExecutionCommand::List {
                suite,
                case,
                status,
                trigger,
                paging,
            } => {
                let query = ExecutionQuery {
                    suite_id: *suite,
                    test_case_id: *case,
                    status: status.clone(),
                    trigger_type: trigger.clone(),
                    page: paging.page,
                    page_size: paging.page_size,
                };
                let page = api.get_executions(&query).await?;
                out.list(&page, page.items.iter().map(ExecutionRow::from))
            }
            ExecutionCommand::Show { id } => {
                let detail = api.get_execution_details(*id).await?;
                out.list(&detail, detail.details.iter().map(StepRow::from))
            }
        }
    }
}

impl StatsCommand {
    async fn run(&self, api: &ApiClient, out: &Output) -> Result<()> {
        match self {
            StatsCommand::Trend { project, days } => {
                let trend = api.get_project_trend(*project, *days).await?;
                out.list(&trend, trend.trend.iter().map(TrendRow::from))
            }
            StatsCommand::Failures {
                project,
                days,
                limit,
            } => {
                let query = TopFailuresQuery {
                    project_id: *project,
                    days: *days,
                    limit: *limit,
                };
                let failures = api.get_top_failures(&query).await?;
                out.list(&failures, failures.items.iter().map(FailureRow::from))
            }
            StatsCommand::SuiteHistory { suite, limit } => {
                let history = api.get_suite_history(*suite, *limit).await?;
                out.list(&history, history.history.iter().map(SuiteRunRow::from))
            }
        }
    }
}

fn execution_rows(execution: &Execution) -> Vec<KeyValueRow> {
    vec![
        KeyValueRow::new("Execution", execution.id),
        KeyValueRow::new("Status", &execution.status),
        KeyValueRow::new(
            "Passed",
            format!("{}/{}", execution.passed_count, execution.total_count),
        ),
        KeyValueRow::new("Pass rate", format!("{:.1}%", execution.pass_rate())),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::Cli;
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use apipilot_client::error::TransportError;
    use apipilot_client::http::HttpClient;
    use apipilot_client::interceptor::EnvelopeInterceptor;
    use apipilot_client::notify::SilentNotifier;
    use apipilot_client::transport::{HttpRequest, HttpResponse, Transport};
    use apipilot_client::ClientConfig;
    use async_trait::async_trait;
    use clap::Parser;
    use serde_json::json;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("apipilot").chain(args.iter().copied()))
    }

    /// Replays canned answers in order.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    }

    impl ScriptedTransport {
        fn with(responses: Vec<Result<HttpResponse, TransportError>>) -> Arc<Self> {
            Arc::new(ScriptedTransport {
                responses: Mutex::new(responses.into()),
            })
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::network("no scripted response")))
        }
    }

    fn scripted_api(responses: Vec<Result<HttpResponse, TransportError>>) -> ApiClient {
        let http = HttpClient::new(
            ClientConfig::default(),
            ScriptedTransport::with(responses),
            Arc::new(EnvelopeInterceptor::new(Arc::new(SilentNotifier))),
        );
        ApiClient::from_http(http)
    }

    #[test]
    fn test_runs_are_not_timed_out() {
        assert!(!parse(&["suite", "run", "3", "--env", "1"]).should_timeout());
        assert!(!parse(&["schedule", "run", "3"]).should_timeout());
        assert!(parse(&["project", "ls"]).should_timeout());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&["--base-url", "http://h:1", "--timeout-ms", "500", "--token", "t", "dash"]);
        let config = cli.apply_flags(ClientConfig::default().with_token("from-env"));
        assert_eq!(config.endpoint("/projects"), "http://h:1/api/v1/projects");
        assert_eq!(config.timeout.as_millis(), 500);
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(Cli::command_timeout(&config).as_millis(), 5_500);
    }

    #[test]
    fn test_unset_flags_keep_config() {
        let base = ClientConfig::new("http://env:2").with_token("from-env");
        let config = parse(&["dash"]).apply_flags(base.clone());
        assert_eq!(config, base);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let args = ["apipilot", "--timeout-ms", "0", "dash"];
        assert!(Cli::try_parse_from(args).is_err());
        assert!(Cli::try_parse_from(["apipilot", "--timeout-ms", "1", "dash"]).is_ok());
    }

    #[test]
    fn test_reorder_requires_ids() {
        let args = ["apipilot", "suite", "reorder", "3"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[tokio::test]
    async fn test_failed_command_reports_mapped_message() {
        let cli = parse(&["project", "show", "9"]);
        let api = scripted_api(vec![Ok(HttpResponse {
            status: 404,
            body: json!({"message": "项目不存在"}).to_string(),
        })]);
        let err = cli.run_with(&api).await.unwrap_err();
        assert_eq!(crate::error_message(&err), "项目不存在");

        let api = scripted_api(vec![Err(TransportError::network(
            "timeout: operation timed out",
        ))]);
        let err = cli.run_with(&api).await.unwrap_err();
        assert_eq!(crate::error_message(&err), "请求超时");
    }
}
