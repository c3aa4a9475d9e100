pub mod analysis;
pub mod compare;
pub mod divergence;
pub mod inventory;
pub mod orchestration;
pub mod profiles;
pub mod scoring;
pub mod session;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use analysis::{AnalysisError, AnalysisResult, NarrativePort, NarrativeService};
pub use compare::{ComparisonError, ComparisonSession};
pub use divergence::{build_heatmap, gap, group_divergence, Heatmap};
pub use inventory::{Domain, Question, QuestionBank};
pub use profiles::{Profile, ProfileRepository, Role, VaultProfileRepository};
pub use scoring::{calculate_scores, Answer, DomainScore, Level};
pub use workspace::{AppConfig, Vault, Workspace};
