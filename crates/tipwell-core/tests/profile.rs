use tipwell_core::error::CoreError;
use tipwell_core::models::goal::Goal;
use tipwell_core::models::profile::{Gender, Profile};

#[test]
fn valid_profile_is_accepted() {
    let profile = Profile::new(25, Gender::Female, vec![Goal::BetterSleep]).unwrap();
    assert_eq!(profile.primary_goal(), Some(Goal::BetterSleep));
}

#[test]
fn age_bounds_are_inclusive() {
    assert!(Profile::new(10, Gender::Male, vec![Goal::StayActive]).is_ok());
    assert!(Profile::new(80, Gender::Male, vec![Goal::StayActive]).is_ok());
    assert_eq!(
        Profile::new(9, Gender::Male, vec![Goal::StayActive]),
        Err(CoreError::AgeOutOfRange(9))
    );
    assert_eq!(
        Profile::new(81, Gender::Male, vec![Goal::StayActive]),
        Err(CoreError::AgeOutOfRange(81))
    );
}

#[test]
fn empty_goals_are_rejected() {
    assert_eq!(
        Profile::new(30, Gender::Other, vec![]),
        Err(CoreError::NoGoals)
    );
}

#[test]
fn profile_json_uses_goal_and_gender_ids() {
    let profile = Profile::new(25, Gender::PreferNotToSay, vec![Goal::BetterSleep]).unwrap();
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "age": 25,
            "gender": "prefer-not-to-say",
            "goals": ["better-sleep"],
        })
    );
}

#[test]
fn deserialized_profile_can_fail_validation() {
    let profile: Profile =
        serde_json::from_str(r#"{"age": 5, "gender": "female", "goals": ["better-sleep"]}"#)
            .unwrap();
    assert_eq!(profile.validate(), Err(CoreError::AgeOutOfRange(5)));
}

#[test]
fn goal_ids_round_trip_through_from_str() {
    for goal in Goal::ALL {
        assert_eq!(goal.id().parse::<Goal>().unwrap(), goal);
    }
    assert!(matches!(
        "run-a-marathon".parse::<Goal>(),
        Err(CoreError::UnknownGoal(_))
    ));
}

#[test]
fn better_sleep_label() {
    assert_eq!(Goal::BetterSleep.label(), "better sleep");
}

#[test]
fn gender_parses_form_values() {
    assert_eq!("prefer-not-to-say".parse::<Gender>().unwrap(), Gender::PreferNotToSay);
    assert!("robot".parse::<Gender>().is_err());
}
