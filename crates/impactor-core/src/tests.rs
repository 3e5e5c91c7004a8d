#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::DVec3;

    use crate::commands::SimCommand;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::SimSnapshot;
    use crate::types::SimTime;

    #[test]
    fn test_phase_has_body() {
        assert!(!SimPhase::Idle.has_body());
        assert!(SimPhase::Flying.has_body());
        assert!(SimPhase::Impacted.has_body());
        assert_eq!(SimPhase::default(), SimPhase::Idle);
    }

    #[test]
    fn test_model_names_and_meshes() {
        assert_eq!(AsteroidModel::A1.display_name(), "Asteroid A1");
        assert_eq!(AsteroidModel::A6.display_name(), "Asteroid A6");
        for model in AsteroidModel::ALL {
            let path = model.mesh_path();
            assert!(path.starts_with("/models/asteroids/"));
            assert!(path.ends_with(".stl"));
            // Mesh file stem matches the label, lowercased.
            assert!(path.contains(&model.label().to_lowercase()));
        }
    }

    #[test]
    fn test_command_tagged_json() {
        let json = serde_json::to_string(&SimCommand::SetDiameter { km: 2.5 }).unwrap();
        assert_eq!(json, r#"{"type":"SetDiameter","km":2.5}"#);

        let cmd: SimCommand = serde_json::from_str(r#"{"type":"Launch"}"#).unwrap();
        assert!(matches!(cmd, SimCommand::Launch));

        let cmd: SimCommand =
            serde_json::from_str(r#"{"type":"DragEarth","delta_x":-12.0}"#).unwrap();
        assert!(matches!(cmd, SimCommand::DragEarth { delta_x } if delta_x == -12.0));
    }

    #[test]
    fn test_event_serde() {
        let events = vec![
            SimEvent::Launched {
                name: "Asteroid A3".into(),
                model: AsteroidModel::A3,
                diameter_km: 1.5,
            },
            SimEvent::LaunchRejected {
                reason: LaunchRejection::AwaitingReset,
            },
            SimEvent::Impact {
                position: DVec3::new(0.0, 0.0, 10.5),
            },
            SimEvent::PlayImpactSound,
            SimEvent::CameraShakeStarted,
            SimEvent::CameraShakeEnded,
            SimEvent::ExplosionFaded,
            SimEvent::Reset,
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            assert!(json.contains("\"type\""), "events are tagged: {json}");
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(Duration::from_millis(250));
        time.advance(Duration::from_millis(750));
        assert_eq!(time.frame, 2);
        assert_eq!(time.elapsed, Duration::from_secs(1));
        assert_eq!(time.elapsed_secs(), 1.0);
    }

    #[test]
    fn test_default_snapshot_is_idle() {
        let snapshot = SimSnapshot::default();
        assert_eq!(snapshot.phase, SimPhase::Idle);
        assert!(snapshot.body.is_none());
        assert!(snapshot.impact.is_none());
        assert!(snapshot.explosion.is_none());
        assert!(snapshot.events.is_empty());

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, SimPhase::Idle);
    }
}
