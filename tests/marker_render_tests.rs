use approx::assert_abs_diff_eq;
use plot_markers::api::{LinearPlotHost, Plot, PlotOptions};
use plot_markers::core::{MarkTarget, PixelPoint, PlotOffset, ProjectionRequest, Viewport};
use plot_markers::extensions::{
    MarkerOptions, MarkerSide, MarkerSides, MarkerStore, MarkerStyle,
};
use plot_markers::render::{Color, DrawCommand, LineJoin, RecordingContext};

fn at_pixel(left: f64, top: f64) -> impl Fn(ProjectionRequest) -> plot_markers::ChartResult<PixelPoint> {
    move |_| Ok(PixelPoint::new(left, top))
}

fn assert_path(actual: &[(f64, f64)], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len(), "path length");
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(a.0, e.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.1, e.1, epsilon = 1e-9);
    }
}

#[test]
fn empty_store_issues_no_drawing_calls() {
    let store = MarkerStore::new();
    let mut ctx = RecordingContext::new();
    store
        .render(&mut ctx, &MarkerOptions::default())
        .expect("render");
    assert!(ctx.is_empty());
}

#[test]
fn top_pointer_traces_expected_triangle() {
    let mut store = MarkerStore::new();
    let style = MarkerStyle::new().with_sides(MarkerSides::new([MarkerSide::Top]).expect("sides"));
    let _ = store.add(Some(MarkTarget::point(1.0, 1.0)), style, at_pixel(100.0, 100.0));

    let mut ctx = RecordingContext::new();
    store
        .render(&mut ctx, &MarkerOptions::default())
        .expect("render");

    assert_path(
        &ctx.path_points(),
        &[(100.0, 92.0), (95.8, 88.4), (104.2, 88.4), (100.0, 92.0)],
    );
}

#[test]
fn two_sides_share_one_filled_and_stroked_path() {
    let mut store = MarkerStore::new();
    let green = Color::parse_css("#00ff00").expect("color");
    let style = MarkerStyle::new()
        .with_color(green)
        .with_sides(MarkerSides::new([MarkerSide::Left, MarkerSide::Right]).expect("sides"));
    let _ = store.add(Some(MarkTarget::point(0.0, 0.0)), style, at_pixel(50.0, 40.0));

    let mut ctx = RecordingContext::new();
    store
        .render(&mut ctx, &MarkerOptions::default())
        .expect("render");

    assert_eq!(ctx.count(|c| matches!(c, DrawCommand::BeginPath)), 1);
    assert_eq!(ctx.sub_path_count(), 2);
    assert_eq!(ctx.count(|c| matches!(c, DrawCommand::ClosePath)), 1);
    assert_eq!(ctx.fill_count(), 1);
    assert_eq!(ctx.stroke_count(), 1);
    assert!(ctx.commands().contains(&DrawCommand::FillColor(green)));
    assert!(ctx.commands().contains(&DrawCommand::StrokeColor(green)));

    assert_path(
        &ctx.path_points(),
        &[
            (42.0, 40.0),
            (38.4, 35.8),
            (38.4, 44.2),
            (42.0, 40.0),
            (58.0, 40.0),
            (61.6, 35.8),
            (61.6, 44.2),
            (58.0, 40.0),
        ],
    );
}

#[test]
fn marker_pass_uses_expected_command_order() {
    let mut store = MarkerStore::new();
    let style = MarkerStyle::new().with_sides(MarkerSides::new([MarkerSide::Bottom]).expect("sides"));
    let _ = store.add(Some(MarkTarget::point(0.0, 0.0)), style, at_pixel(10.0, 10.0));

    let mut ctx = RecordingContext::new();
    let options = MarkerOptions::default();
    store.render(&mut ctx, &options).expect("render");

    let commands = ctx.commands();
    assert_eq!(commands[0], DrawCommand::LineWidth(1.0));
    assert_eq!(commands[1], DrawCommand::LineJoin(LineJoin::Round));
    assert_eq!(commands[2], DrawCommand::BeginPath);
    assert_eq!(
        &commands[commands.len() - 5..],
        &[
            DrawCommand::ClosePath,
            DrawCommand::FillColor(options.color),
            DrawCommand::Fill,
            DrawCommand::StrokeColor(options.color),
            DrawCommand::Stroke,
        ]
    );
}

#[test]
fn defaults_apply_when_marker_has_no_overrides() {
    let mut store = MarkerStore::new();
    let _ = store.add(
        Some(MarkTarget::point(0.0, 0.0)),
        MarkerStyle::new(),
        at_pixel(20.0, 20.0),
    );

    let mut ctx = RecordingContext::new();
    let options = MarkerOptions::default();
    store.render(&mut ctx, &options).expect("render");

    assert_eq!(ctx.sub_path_count(), 4);
    assert!(
        ctx.commands()
            .contains(&DrawCommand::FillColor(Color::rgba(0.0, 0.0, 0.0, 0.5)))
    );
    let tips: Vec<(f64, f64)> = ctx.path_points().into_iter().step_by(4).collect();
    assert_path(&tips, &[(20.0, 12.0), (12.0, 20.0), (28.0, 20.0), (20.0, 28.0)]);
}

#[test]
fn plot_overlay_translates_then_draws_markers_in_insertion_order() {
    let host = LinearPlotHost::from_domains(Viewport::new(400, 200), (0.0, 100.0), (0.0, 64.0))
        .expect("host")
        .with_plot_offset(PlotOffset::new(40.0, 8.0));
    let mut plot = Plot::new(host, PlotOptions::default()).expect("plot init");
    let top = MarkerSides::new([MarkerSide::Top]).expect("sides");
    let _ = plot.set_marker(Some(MarkTarget::point(75.0, 16.0)), None, Some(top.clone()));
    let _ = plot.set_marker(Some(MarkTarget::point(25.0, 16.0)), None, Some(top));

    let mut ctx = RecordingContext::new();
    plot.draw_overlay(&mut ctx).expect("overlay");

    let commands = ctx.commands();
    assert_eq!(commands[0], DrawCommand::Save);
    assert_eq!(commands[1], DrawCommand::Translate { dx: 40.0, dy: 8.0 });
    assert_eq!(commands.last(), Some(&DrawCommand::Restore));

    let tips: Vec<(f64, f64)> = ctx.path_points().into_iter().step_by(4).collect();
    assert_path(&tips, &[(300.0, 142.0), (100.0, 142.0)]);
    assert!(!plot.has_pending_overlay_redraw());
}
