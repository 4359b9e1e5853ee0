/// Use cases module containing application business logic orchestration
mod generate_insights;
mod publish_artifacts;

pub use generate_insights::GenerateInsightsUseCase;
pub use publish_artifacts::PublishArtifactsUseCase;
