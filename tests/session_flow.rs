use throwsense::{
    AnalysisConfig, FeedbackSeverity, Joint, Landmark, LandmarkFrame, SessionController,
    SessionStatus,
};

const FRAME_SECS: f64 = 1.0 / 30.0;

fn blank_landmarks() -> Vec<Landmark> {
    vec![
        Landmark {
            x: 0.0,
            y: 0.0,
            visibility: 0.0
        };
        33
    ]
}

fn set(landmarks: &mut [Landmark], joint: Joint, x: f64, y: f64, visibility: f64) {
    landmarks[joint.index()] = Landmark { x, y, visibility };
}

/// Level trunk, right arm fully extended along the horizontal.
fn stable_frame(timestamp: f64, wrist_x: f64, wrist_visibility: f64) -> LandmarkFrame {
    let mut landmarks = blank_landmarks();
    set(&mut landmarks, Joint::LeftShoulder, 0.6, 0.4, 0.9);
    set(&mut landmarks, Joint::RightShoulder, 0.4, 0.4, 0.9);
    set(&mut landmarks, Joint::RightElbow, 0.3, 0.4, 0.9);
    set(&mut landmarks, Joint::RightWrist, wrist_x, 0.4, wrist_visibility);
    LandmarkFrame::new(landmarks, timestamp)
}

/// Bent elbow (90°) with a level trunk.
fn bent_arm_frame(timestamp: f64) -> LandmarkFrame {
    let mut landmarks = blank_landmarks();
    set(&mut landmarks, Joint::LeftShoulder, 0.6, 0.4, 0.9);
    set(&mut landmarks, Joint::RightShoulder, 0.4, 0.4, 0.9);
    set(&mut landmarks, Joint::RightElbow, 0.3, 0.4, 0.9);
    set(&mut landmarks, Joint::RightWrist, 0.3, 0.3, 0.9);
    LandmarkFrame::new(landmarks, timestamp)
}

/// Shoulders dropped on one side (~27° lean), arm extended.
fn leaning_frame(timestamp: f64) -> LandmarkFrame {
    let mut landmarks = blank_landmarks();
    set(&mut landmarks, Joint::LeftShoulder, 0.6, 0.5, 0.9);
    set(&mut landmarks, Joint::RightShoulder, 0.4, 0.4, 0.9);
    set(&mut landmarks, Joint::RightElbow, 0.3, 0.4, 0.9);
    set(&mut landmarks, Joint::RightWrist, 0.2, 0.4, 0.9);
    LandmarkFrame::new(landmarks, timestamp)
}

#[test]
fn full_session_reaches_ready_and_rewards_a_fast_release() {
    let mut controller = SessionController::new(AnalysisConfig::default());
    controller.start();
    assert_eq!(controller.status(), SessionStatus::Active);

    // Hold a stable extended posture for ~3 s
    let mut snapshot = None;
    for i in 0..91 {
        let output = controller
            .process_frame(&stable_frame(i as f64 * FRAME_SECS, 0.2, 0.9))
            .unwrap();
        snapshot = Some(output.snapshot);
    }
    let snapshot = snapshot.unwrap();
    assert!(snapshot.is_ready_to_throw);
    assert!(snapshot.stable_seconds >= 3.0);

    // Fast wrist motion at full extension reads as a good shot
    let output = controller
        .process_frame(&stable_frame(91.0 * FRAME_SECS, 0.12, 0.9))
        .unwrap();
    assert!(output.snapshot.velocity.unwrap() > 50);
    assert_eq!(
        output.feedback.unwrap().severity,
        FeedbackSeverity::Success
    );

    let summary = controller.finalize().unwrap();
    assert_eq!(summary.throw_count, 92);
    assert_eq!(summary.stable_ratio, 100);
    assert!(summary.max_rom.unwrap() >= 179);
    assert!(summary.avg_velocity > 0);
}

#[test]
fn occlusion_freezes_the_velocity_reference() {
    let mut controller = SessionController::new(AnalysisConfig::default());
    controller.start();

    controller
        .process_frame(&stable_frame(0.0, 0.2, 0.9))
        .unwrap();

    // Occluded wrist: no velocity, reference stays at frame 0
    let occluded = controller
        .process_frame(&stable_frame(FRAME_SECS, 0.5, 0.3))
        .unwrap();
    assert_eq!(occluded.snapshot.velocity, None);

    // Next visible frame measures against frame 0, not the occluded one:
    // 0.02 units over 2/30 s → 30 display units
    let visible = controller
        .process_frame(&stable_frame(2.0 * FRAME_SECS, 0.22, 0.9))
        .unwrap();
    assert_eq!(visible.snapshot.velocity, Some(30));
}

#[test]
fn feedback_priority_tracks_posture_quality() {
    let mut controller = SessionController::new(AnalysisConfig::default());
    controller.start();

    let leaning = controller.process_frame(&leaning_frame(0.0)).unwrap();
    let feedback = leaning.feedback.unwrap();
    assert_eq!(feedback.severity, FeedbackSeverity::Warning);
    assert!(feedback.message.contains("27°"));

    let bent = controller
        .process_frame(&bent_arm_frame(FRAME_SECS))
        .unwrap();
    let feedback = bent.feedback.unwrap();
    assert_eq!(feedback.severity, FeedbackSeverity::Info);
    assert!(feedback.message.contains("90°"));

    let stable = controller
        .process_frame(&stable_frame(2.0 * FRAME_SECS, 0.2, 0.9))
        .unwrap();
    assert_eq!(
        stable.feedback.unwrap().severity,
        FeedbackSeverity::Neutral
    );
}

#[test]
fn instability_resets_the_ready_state() {
    let mut controller = SessionController::new(AnalysisConfig::default());
    controller.start();

    for i in 0..95 {
        controller
            .process_frame(&stable_frame(i as f64 * FRAME_SECS, 0.2, 0.9))
            .unwrap();
    }

    let leaning = controller
        .process_frame(&leaning_frame(95.0 * FRAME_SECS))
        .unwrap();
    assert_eq!(leaning.snapshot.stable_seconds, 0.0);
    assert!(!leaning.snapshot.is_ready_to_throw);

    // Stability restarts from a single frame increment
    let restable = controller
        .process_frame(&stable_frame(96.0 * FRAME_SECS, 0.2, 0.9))
        .unwrap();
    assert!(restable.snapshot.stable_seconds <= FRAME_SECS + 1e-9);
}

#[test]
fn finalize_is_terminal_and_summary_is_serializable() {
    let mut controller = SessionController::new(AnalysisConfig::default());
    let session_id = controller.start();

    controller
        .process_frame(&stable_frame(0.0, 0.2, 0.9))
        .unwrap();

    let summary = controller.finalize().unwrap();
    assert_eq!(summary.session_id, session_id);
    assert!(summary.duration_seconds >= 0.0);

    // Terminal: no more frames, no second finalize
    assert!(controller
        .process_frame(&stable_frame(FRAME_SECS, 0.2, 0.9))
        .is_err());
    assert!(controller.finalize().is_err());

    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"sessionId\""));
    assert!(json.contains("\"throwCount\":1"));
}

#[test]
fn two_subjects_track_independently() {
    let mut first = SessionController::new(AnalysisConfig::default());
    let mut second = SessionController::new(AnalysisConfig::default());
    first.start();
    second.start();

    for i in 0..10 {
        first
            .process_frame(&stable_frame(i as f64 * FRAME_SECS, 0.2, 0.9))
            .unwrap();
        second.process_frame(&bent_arm_frame(i as f64 * FRAME_SECS)).unwrap();
    }

    let first_summary = first.finalize().unwrap();
    let second_summary = second.finalize().unwrap();
    assert_ne!(first_summary.session_id, second_summary.session_id);
    assert_eq!(first_summary.stable_ratio, 100);
    assert_eq!(second_summary.stable_ratio, 0);
}
