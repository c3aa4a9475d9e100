use anyhow::Result;
use personalitylab::inventory::{Domain, QuestionBank};
use personalitylab::profiles::{ProfileRepository, Role};
use personalitylab::scoring::Level;
use personalitylab::session::{TestRun, TestRunError};

use crate::support::lab::{LabFixture, HIGH_EVERYWHERE, MIDPOINT};

#[test]
fn interrupted_test_resumes_and_saves_profile() -> Result<()> {
    let fixture = LabFixture::new();
    let progress = fixture.workspace.progress(&fixture.vault);

    let mut run = TestRun::new(QuestionBank::standard());
    for value in &HIGH_EVERYWHERE[..4] {
        run.answer(*value)?;
    }
    progress.save_progress(&run.progress())?;

    // A fresh process picks the test back up at the same item.
    let reopened = fixture.reopen();
    let stored = reopened
        .progress(&fixture.vault)
        .progress()
        .expect("progress persisted");
    let mut resumed = TestRun::resume(QuestionBank::standard(), stored);
    assert_eq!(resumed.position(), 4);
    assert_eq!(resumed.current_question().map(|q| q.id.as_str()), Some("5"));
    for value in &HIGH_EVERYWHERE[4..] {
        resumed.answer(*value)?;
    }
    assert!(resumed.is_complete());

    let (profile, result) = resumed.finish("  Sam Rivera ", Role::Partner)?;
    progress.save_last_result(&result)?;
    progress.clear_progress()?;
    fixture.repository().save_profile(&profile)?;

    for domain in Domain::ALL {
        let score = profile.score(domain).expect("domain scored");
        assert_eq!(score.percentage, 100, "{domain} should max out");
        assert_eq!(score.level, Level::High);
        assert_eq!(score.max_score, 10);
    }
    assert!(progress.progress().is_none());
    assert_eq!(
        progress.last_result().map(|r| r.person_name),
        Some("Sam Rivera".to_string())
    );

    // Saving replaces the demo listing with the real library.
    let library = fixture.repository().get_profiles()?;
    assert_eq!(library.len(), 1);
    assert_eq!(library[0].name, "Sam Rivera");
    assert!(!library[0].is_demo());
    Ok(())
}

#[test]
fn midpoint_answers_score_neutral_across_the_board() -> Result<()> {
    let fixture = LabFixture::new();
    let profile = fixture.take_test("Casey", Role::Myself, MIDPOINT);
    for score in &profile.scores {
        assert_eq!(score.percentage, 60);
        assert_eq!(score.level, Level::Neutral);
    }
    let stored = fixture
        .repository()
        .get_profile_by_id(&profile.id)?
        .expect("profile stored");
    assert_eq!(stored, profile);
    Ok(())
}

#[test]
fn unfinished_or_unnamed_tests_are_not_saved() {
    let mut run = TestRun::new(QuestionBank::standard());
    assert_eq!(run.answer(6), Err(TestRunError::OutOfRange { value: 6 }));
    run.answer(3).unwrap();
    assert_eq!(
        run.finish("Casey", Role::Friend).unwrap_err(),
        TestRunError::Incomplete {
            answered: 1,
            total: 10
        }
    );
    for value in &MIDPOINT[1..] {
        run.answer(*value).unwrap();
    }
    assert_eq!(
        run.finish("   ", Role::Friend).unwrap_err(),
        TestRunError::MissingName
    );
}
