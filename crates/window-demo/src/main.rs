// File: crates/window-demo/src/main.rs
// Summary: Windowed host that shows the sample bar chart via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use barchart_core::{sample_data, BarChartView, ChartStyle};
use barchart_skia::{render_to_rgba8, RenderOptions, SkiaTextMetrics};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Bar Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(720.0, 480.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let style = ChartStyle::default().with_density(window.scale_factor() as f32);
    let mut view = BarChartView::with_style(SkiaTextMetrics::new(), style);
    let size = window.inner_size();
    view.set_size(size.width as i32, size.height as i32);
    view.set_y_axis_data(sample_data());
    info!(bars = view.data().len(), "sample data loaded");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::Escape), .. },
                    ..
                } => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    view.set_size(new_size.width as i32, new_size.height as i32);
                }
                WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                    view.set_style(view.style().with_density(scale_factor as f32));
                    view.set_size(new_inner_size.width as i32, new_inner_size.height as i32);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if view.is_invalidated() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = redraw(&mut view, &mut surface) {
                    error!("redraw failed: {e:#}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}

fn redraw(
    view: &mut BarChartView<SkiaTextMetrics>,
    surface: &mut softbuffer::Surface,
) -> Result<()> {
    let (w, h) = view.size();
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w as u32), NonZeroU32::new(h as u32)) else {
        // Minimized.
        view.take_invalidated();
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize surface: {e:?}"))?;

    let opts = RenderOptions { width: w, height: h, ..RenderOptions::default() };
    let (rgba, _, _, _) = render_to_rgba8(view, &opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e:?}"))?;
    // Softbuffer pixels are 0RGB.
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e:?}"))?;
    debug!(width = w, height = h, "presented frame");
    Ok(())
}
