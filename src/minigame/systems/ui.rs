//! Roll UI systems
//!
//! The widgets only reflect state: every frame the roll session and the bowl
//! shake are read and pushed into whichever widgets exist. A missing widget is
//! simply skipped.

use bevy::prelude::*;

use crate::minigame::roll::RollSession;
use crate::minigame::shake::BowlShake;
use crate::minigame::types::*;

/// Work out what the widgets should show.
pub fn reflect_roll_ui(session: &RollSession, bowl_shaking: bool) -> RollUiState {
    let mut state = if session.is_rolling() {
        RollUiState {
            status: STATUS_ROLLING,
            result: None,
            loading: true,
            roll_enabled: false,
        }
    } else if let Some(pair) = session
        .last_result()
        .filter(|_| session.is_detection_complete())
    {
        RollUiState {
            status: STATUS_SETTLED,
            result: Some(pair.to_string()),
            loading: false,
            roll_enabled: true,
        }
    } else {
        RollUiState {
            status: STATUS_IDLE,
            result: Some(String::new()),
            loading: false,
            roll_enabled: true,
        }
    };

    if bowl_shaking {
        state.roll_enabled = false;
    }

    state
}

/// Push the current roll state into the on-screen widgets.
pub fn refresh_roll_ui(
    session: Option<Res<RollSession>>,
    bowl_query: Query<&BowlShake>,
    mut texts: ParamSet<(
        Query<&mut Text, With<StatusText>>,
        Query<&mut Text, With<ResultText>>,
    )>,
    mut loading_query: Query<&mut Visibility, With<LoadingIndicator>>,
    mut button_query: Query<(&mut RollButton, Option<&mut BackgroundColor>)>,
) {
    let Some(session) = session else {
        return;
    };

    let shaking = bowl_query.iter().any(|shake| shake.is_shaking());
    let state = reflect_roll_ui(&session, shaking);

    for mut text in texts.p0().iter_mut() {
        if text.0 != state.status {
            text.0 = state.status.to_string();
        }
    }

    if let Some(result) = &state.result {
        for mut text in texts.p1().iter_mut() {
            if &text.0 != result {
                text.0 = result.clone();
            }
        }
    }

    let visibility = if state.loading {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut loading in loading_query.iter_mut() {
        loading.set_if_neq(visibility);
    }

    for (mut button, background) in button_query.iter_mut() {
        if button.enabled != state.roll_enabled {
            button.enabled = state.roll_enabled;
        }
        if let Some(mut background) = background {
            let color = if state.roll_enabled {
                ROLL_BUTTON_ENABLED
            } else {
                ROLL_BUTTON_DISABLED
            };
            background.set_if_neq(BackgroundColor(color));
        }
    }
}

/// Pressing the roll button throws the dice and shakes the bowl.
pub fn handle_roll_button(
    button_query: Query<(&Interaction, &RollButton), Changed<Interaction>>,
    mut roll_requests: MessageWriter<RollDiceRequested>,
    mut shake_requests: MessageWriter<ShakeBowlRequested>,
) {
    for (interaction, button) in button_query.iter() {
        if *interaction != Interaction::Pressed || !button.enabled {
            continue;
        }

        roll_requests.write(RollDiceRequested);
        shake_requests.write(ShakeBowlRequested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minigame::types::{DieSample, FaceNormalTable};
    use std::f32::consts::FRAC_PI_2;

    fn completed(first: Quat, second: Quat) -> RollSession {
        let mut session = RollSession::default();
        session.request_roll(0.0);
        let sample = |orientation| DieSample {
            faces: &FaceNormalTable::CANONICAL,
            orientation,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
        };
        // Launch frame, then the settled frame.
        session.advance(0.1, &[sample(first), sample(second)]);
        session.advance(0.1, &[sample(first), sample(second)]);
        session
    }

    #[test]
    fn test_idle_state() {
        let state = reflect_roll_ui(&RollSession::default(), false);
        assert_eq!(state.status, STATUS_IDLE);
        assert_eq!(state.result.as_deref(), Some(""));
        assert!(!state.loading);
        assert!(state.roll_enabled);
    }

    #[test]
    fn test_rolling_state() {
        let mut session = RollSession::default();
        session.request_roll(2.0);
        let state = reflect_roll_ui(&session, false);
        assert_eq!(state.status, STATUS_ROLLING);
        assert_eq!(state.result, None);
        assert!(state.loading);
        assert!(!state.roll_enabled);
    }

    #[test]
    fn test_complete_state() {
        let session = completed(Quat::from_rotation_z(FRAC_PI_2), Quat::from_rotation_z(-FRAC_PI_2));
        let state = reflect_roll_ui(&session, false);
        assert_eq!(state.status, STATUS_SETTLED);
        assert_eq!(state.result.as_deref(), Some("2 + 5 = 7"));
        assert!(!state.loading);
        assert!(state.roll_enabled);
    }

    #[test]
    fn test_shaking_disables_roll() {
        assert!(!reflect_roll_ui(&RollSession::default(), true).roll_enabled);
        let session = completed(Quat::IDENTITY, Quat::IDENTITY);
        let state = reflect_roll_ui(&session, true);
        assert!(!state.roll_enabled);
        assert_eq!(state.result.as_deref(), Some("1 + 1 = 2"));
    }
}
