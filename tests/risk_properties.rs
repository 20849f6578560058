use proptest::prelude::*;

use transformation_assistant::domain::project::{ProjectContext, ProjectPhase, TransformationType};
use transformation_assistant::domain::prompts::{build_prompt, PromptKind};
use transformation_assistant::domain::risk::{score, Readiness, RiskLevel};

/// High phrases that contain no other table phrase.
const STANDALONE_HIGH: &[&str] = &["resist", "push back", "complain", "angry", "refuse", "not doing"];

fn notes_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z .,!?]{0,200}"
}

fn kind_strategy() -> impl Strategy<Value = PromptKind> {
    prop_oneof![
        Just(PromptKind::SummaryGuidance),
        Just(PromptKind::LeadershipScript)
    ]
}

proptest! {
    #[test]
    fn readiness_stays_in_bounds(text in ".{0,300}") {
        let result = score(&text);
        let readiness = result.readiness().value();
        prop_assert!((10..=100).contains(&readiness));
    }

    #[test]
    fn readiness_never_rises_with_score(a in 0u32..50, b in 0u32..50) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Readiness::from_score(low) >= Readiness::from_score(high));
    }

    #[test]
    fn level_follows_default_thresholds(text in notes_strategy()) {
        let result = score(&text);
        let expected = match result.score() {
            s if s >= 6 => RiskLevel::High,
            s if s >= 3 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        };
        prop_assert_eq!(result.level(), expected);
        prop_assert_eq!(result.score(), 2 * result.high_hits() + result.medium_hits());
    }

    #[test]
    fn appending_a_high_phrase_adds_two(
        text in notes_strategy(),
        index in 0..STANDALONE_HIGH.len(),
    ) {
        let phrase = STANDALONE_HIGH[index];
        let before = score(&text);
        let after = score(&format!("{text} {phrase} "));

        prop_assert_eq!(after.score(), before.score() + 2);
        prop_assert_eq!(after.high_hits(), before.high_hits() + 1);
    }

    #[test]
    fn scoring_ignores_case(text in notes_strategy()) {
        prop_assert_eq!(score(&text), score(&text.to_uppercase()));
    }

    #[test]
    fn prompts_are_deterministic_and_bracket_free(
        text in ".{0,300}",
        name in ".{0,40}",
        kind in kind_strategy(),
    ) {
        let context = ProjectContext::new(name, TransformationType::OrgRestructure, ProjectPhase::Planning);

        let first = build_prompt(kind, &text, &context);
        let second = build_prompt(kind, &text, &context);

        prop_assert_eq!(&first, &second);
        prop_assert!(!first.user_prompt.contains('<'));
        prop_assert!(!first.user_prompt.contains('>'));
        prop_assert!(!first.system_prompt.contains('<'));
    }
}
