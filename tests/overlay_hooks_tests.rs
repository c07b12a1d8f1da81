use std::cell::RefCell;
use std::rc::Rc;

use plot_markers::ChartError;
use plot_markers::ChartResult;
use plot_markers::api::{LinearPlotHost, Plot, PlotOptions};
use plot_markers::core::{MarkTarget, PlotOffset, Viewport};
use plot_markers::extensions::{OverlayContext, OverlayHook};
use plot_markers::render::{DrawCommand, DrawingContext, RecordingContext};

#[derive(Clone)]
struct RecordingHook {
    id: String,
    passes: Rc<RefCell<Vec<PlotOffset>>>,
}

impl RecordingHook {
    fn new(id: impl Into<String>, passes: Rc<RefCell<Vec<PlotOffset>>>) -> Self {
        Self {
            id: id.into(),
            passes,
        }
    }
}

impl OverlayHook for RecordingHook {
    fn id(&self) -> &str {
        &self.id
    }

    fn draw_overlay(
        &mut self,
        ctx: &mut dyn DrawingContext,
        overlay: OverlayContext<'_>,
    ) -> ChartResult<()> {
        self.passes.borrow_mut().push(overlay.plot_offset);
        ctx.begin_path();
        Ok(())
    }
}

struct FailingHook;

impl OverlayHook for FailingHook {
    fn id(&self) -> &str {
        "failing"
    }

    fn draw_overlay(
        &mut self,
        _ctx: &mut dyn DrawingContext,
        _overlay: OverlayContext<'_>,
    ) -> ChartResult<()> {
        Err(ChartError::Backend("surface lost".to_owned()))
    }
}

fn build_plot() -> Plot<LinearPlotHost> {
    let host = LinearPlotHost::from_domains(Viewport::new(300, 300), (0.0, 10.0), (0.0, 10.0))
        .expect("host")
        .with_plot_offset(PlotOffset::new(5.0, 6.0));
    Plot::new(host, PlotOptions::default()).expect("plot init")
}

#[test]
fn marker_overlay_is_registered_at_init() {
    let plot = build_plot();
    assert_eq!(plot.overlay_hook_count(), 1);
    assert!(plot.has_overlay_hook("marker"));
    assert_eq!(plot.overlay_hook_ids(), vec!["marker"]);
}

#[test]
fn hooks_run_after_markers_with_plot_offset() {
    let mut plot = build_plot();
    let passes = Rc::new(RefCell::new(Vec::new()));
    plot.register_overlay_hook(Box::new(RecordingHook::new("recorder", passes.clone())))
        .expect("register hook");
    let _ = plot.set_marker(Some(MarkTarget::point(5.0, 5.0)), None, None);

    let mut ctx = RecordingContext::new();
    plot.draw_overlay(&mut ctx).expect("overlay");

    assert_eq!(passes.borrow().as_slice(), &[PlotOffset::new(5.0, 6.0)]);
    let last_stroke = ctx
        .commands()
        .iter()
        .rposition(|command| *command == DrawCommand::Stroke)
        .expect("marker stroke");
    let last_begin = ctx
        .commands()
        .iter()
        .rposition(|command| *command == DrawCommand::BeginPath)
        .expect("hook path");
    assert!(last_begin > last_stroke);
    assert_eq!(plot.overlay_hook_ids(), vec!["marker", "recorder"]);
}

#[test]
fn duplicate_and_reserved_hook_ids_are_rejected() {
    let mut plot = build_plot();
    let passes = Rc::new(RefCell::new(Vec::new()));
    plot.register_overlay_hook(Box::new(RecordingHook::new("dupe", passes.clone())))
        .expect("first hook");

    let err = plot
        .register_overlay_hook(Box::new(RecordingHook::new("dupe", passes.clone())))
        .expect_err("duplicate must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = plot
        .register_overlay_hook(Box::new(RecordingHook::new("marker", passes.clone())))
        .expect_err("reserved id must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = plot
        .register_overlay_hook(Box::new(RecordingHook::new("", passes)))
        .expect_err("empty id must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn unregister_hook_stops_dispatch() {
    let mut plot = build_plot();
    let passes = Rc::new(RefCell::new(Vec::new()));
    plot.register_overlay_hook(Box::new(RecordingHook::new("to-remove", passes.clone())))
        .expect("register");

    let mut ctx = RecordingContext::new();
    plot.draw_overlay(&mut ctx).expect("overlay");
    assert!(plot.unregister_overlay_hook("to-remove"));
    assert!(!plot.unregister_overlay_hook("to-remove"));
    assert!(!plot.unregister_overlay_hook("marker"));
    plot.draw_overlay(&mut ctx).expect("overlay");

    assert_eq!(passes.borrow().len(), 1);
    assert_eq!(plot.overlay_hook_count(), 1);
}

#[test]
fn failing_hook_still_restores_context() {
    let mut plot = build_plot();
    plot.register_overlay_hook(Box::new(FailingHook))
        .expect("register");

    let mut ctx = RecordingContext::new();
    let err = plot.draw_overlay(&mut ctx).expect_err("hook failure propagates");
    assert!(matches!(err, ChartError::Backend(_)));
    assert_eq!(ctx.commands().last(), Some(&DrawCommand::Restore));
}
