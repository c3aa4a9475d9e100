use anyhow::Result;
use personalitylab::analysis::{
    AnalysisError, AnalysisMode, BackendError, CompletionResponse, GroundingChunk, MockBackend,
    NarrativeService,
};
use personalitylab::compare::{ComparisonError, ComparisonSession};
use personalitylab::divergence::DivergenceTier;
use personalitylab::inventory::Domain;
use personalitylab::profiles::Role;

use crate::support::lab::{LabFixture, HIGH_EVERYWHERE, LOW_EVERYWHERE, MIDPOINT};

const GROUP_REPLY: &str = r#"{
    "overview": "A household split between planners and improvisers.",
    "frictionPoints": ["Morgan vs Riley on routines"],
    "groupDynamics": "Quinn mediates.",
    "scientificContext": "Conscientiousness differences predict task conflict.",
    "strategies": ["Shared calendar", "Weekly check-in"]
}"#;

#[test]
fn heatmap_covers_every_domain_for_the_selection() -> Result<()> {
    let fixture = LabFixture::new();
    let high = fixture.take_test("Morgan Lee", Role::Parent, HIGH_EVERYWHERE);
    let low = fixture.take_test("Riley", Role::Child, LOW_EVERYWHERE);
    let mid = fixture.take_test("Quinn", Role::Partner, MIDPOINT);

    let mut session = ComparisonSession::open(&fixture.repository())?;
    assert_eq!(session.available().len(), 3);
    assert_eq!(session.mode()?, AnalysisMode::Dyadic);

    session.select([&high.id, &low.id, &mid.id])?;
    assert_eq!(session.mode()?, AnalysisMode::Group);
    let matrix = session.heatmap()?;
    let labels: Vec<_> = matrix.members.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, ["Morgan", "Riley", "Quinn"]);
    assert_eq!(matrix.heatmap.rows.len(), 5);

    // 100 vs 20 and 60: (80 + 40) / 2 = 60, the significant boundary.
    let morgan = matrix.heatmap.cell(Domain::Conscientiousness, 0).unwrap();
    assert_eq!(morgan.display_value(), 60);
    assert_eq!(morgan.tier, DivergenceTier::Significant);
    // 20 vs 100 and 60: (80 + 40) / 2 = 60 as well.
    let riley = matrix.heatmap.cell(Domain::Conscientiousness, 1).unwrap();
    assert_eq!(riley.avg_gap, 60.0);
    // 60 vs 100 and 20: (40 + 40) / 2 = 40, minor.
    let quinn = matrix.heatmap.cell(Domain::Conscientiousness, 2).unwrap();
    assert_eq!(quinn.tier, DivergenceTier::Minor);
    Ok(())
}

#[tokio::test]
async fn group_analysis_returns_narrative_with_sources() -> Result<()> {
    let fixture = LabFixture::new();
    let ids: Vec<String> = [
        ("Morgan", HIGH_EVERYWHERE),
        ("Riley", LOW_EVERYWHERE),
        ("Quinn", MIDPOINT),
    ]
    .into_iter()
    .map(|(name, values)| fixture.take_test(name, Role::Friend, values).id)
    .collect();

    let mut session = ComparisonSession::open(&fixture.repository())?;
    session.select(&ids)?;

    let backend = MockBackend::default().with_response(CompletionResponse {
        text: Some(GROUP_REPLY.into()),
        grounding: vec![GroundingChunk {
            title: Some("Big Five in couples".into()),
            uri: Some("https://example.org/couples".into()),
        }],
    });
    let service = NarrativeService::new(backend, &fixture.workspace.config.ai)
        .with_api_key(Some("integration-key".into()));

    let result = session.analyze(&service).await?;
    assert_eq!(result.group_dynamics.as_deref(), Some("Quinn mediates."));
    assert_eq!(result.strategies.len(), 2);
    let sources = result.grounding_sources.expect("sources attached");
    assert_eq!(sources[0].title, "Big Five in couples");

    let requests = service.backend().requests();
    let schema = requests[0].response_schema.as_ref().expect("schema sent");
    assert!(schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .any(|field| field == "groupDynamics"));
    assert!(requests[0].prompt.contains("Morgan"));
    assert!(!session.is_analyzing());
    Ok(())
}

#[tokio::test]
async fn analysis_failures_reach_the_caller_untouched() -> Result<()> {
    let fixture = LabFixture::new();
    let session = ComparisonSession::open(&fixture.repository())?;
    assert_eq!(session.selected_ids(), ["demo-1", "demo-2"]);

    let unconfigured = NarrativeService::new(MockBackend::default(), &fixture.workspace.config.ai)
        .with_api_key(None);
    assert_eq!(
        session.analyze(&unconfigured).await.unwrap_err(),
        ComparisonError::Analysis(AnalysisError::MissingCredentials)
    );
    assert_eq!(unconfigured.backend().call_count(), 0);

    let rejected = NarrativeService::new(
        MockBackend::default().with_error(BackendError::Unauthorized),
        &fixture.workspace.config.ai,
    )
    .with_api_key(Some("stale".into()));
    assert_eq!(
        session.analyze(&rejected).await.unwrap_err(),
        ComparisonError::Analysis(AnalysisError::Provider(BackendError::Unauthorized))
    );
    assert_eq!(rejected.backend().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn chat_uses_the_selected_profiles_as_context() -> Result<()> {
    let fixture = LabFixture::new();
    let session = ComparisonSession::open(&fixture.repository())?;
    let service = NarrativeService::new(
        MockBackend::default().with_text("Alex plans, Jordan improvises."),
        &fixture.workspace.config.ai,
    )
    .with_api_key(Some("integration-key".into()));

    let reply = session.chat(&service, &[], "Who should plan the trip?").await?;
    assert_eq!(reply, "Alex plans, Jordan improvises.");
    let requests = service.backend().requests();
    let system = requests[0].system_prompt.as_deref().unwrap_or_default();
    assert!(system.contains("Alex (The Architect) (Other)"));
    assert_eq!(requests[0].prompt, "Who should plan the trip?");
    Ok(())
}
