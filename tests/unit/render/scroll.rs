use super::*;

fn scroll(time: u64, buffer_start: usize) -> AnimationFrame {
    AnimationFrame::Scroll {
        time,
        scroll_lines: 1,
        buffer_start,
    }
}

#[test]
fn no_scroll_frames_compile_to_nothing() {
    let frames = vec![AnimationFrame::Final {
        time: 0,
        buffer: vec![],
        buffer_start: 0,
    }];
    assert_eq!(compile_scroll(&frames, 21.0, 100, (20.0, 56.0)), "");
}

#[test]
fn keyframes_chain_from_the_origin() {
    let frames = vec![scroll(1000, 1), scroll(2500, 2)];
    let out = compile_scroll(&frames, 21.0, 100, (20.0, 56.0));

    assert_eq!(out.matches("<animateTransform").count(), 2);
    assert!(out.contains(r#"from="20 56" to="20 35" begin="1000ms" dur="100ms" fill="freeze""#));
    assert!(out.contains(r#"from="20 35" to="20 14" begin="2500ms" dur="100ms""#));
}

#[test]
fn coordinates_are_rounded_to_one_decimal() {
    // 13px * 1.3 = 16.900000000000002
    let frames = vec![scroll(0, 1), scroll(10, 2), scroll(20, 3)];
    let out = compile_scroll(&frames, 13.0 * 1.3, 50, (10.0, 46.0));
    assert!(out.contains(r#"to="10 29.1""#));
    assert!(out.contains(r#"to="10 12.2""#));
    assert!(out.contains(r#"to="10 -4.7""#));
}

#[test]
fn non_scroll_frames_are_ignored() {
    let frames = vec![
        AnimationFrame::AddOutput {
            time: 0,
            line_index: 0,
            content: "x".into(),
            color: "#fff".into(),
        },
        scroll(5, 1),
    ];
    let out = compile_scroll(&frames, 10.0, 100, (0.0, 0.0));
    assert_eq!(out.matches("<animateTransform").count(), 1);
    assert!(out.contains(r#"from="0 0" to="0 -10""#));
}
