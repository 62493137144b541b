//! Frame-loop demo: steps the solar catalogue against a synthetic camera
//! and prints which bodies would get screen markers each second.

use clap::Parser;
use glam::{Vec2, Vec3};
use orrery_engine::{solar, Orrery, OrreryConfig, PerspectiveCamera};

#[derive(Parser)]
#[command(name = "orrery-headless")]
#[command(about = "Headless frame loop for the orrery engine")]
struct Args {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Frame interval, seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Body to focus one second in (toggle semantics, as if tapped).
    #[arg(long)]
    focus: Option<String>,

    /// Wall-clock seconds for one Earth year of simulation.
    #[arg(long, default_value_t = 120.0)]
    time_scale: f32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = OrreryConfig {
        time_scale: args.time_scale,
        ..OrreryConfig::default()
    };
    let mut orrery = match Orrery::new(solar::solar_system(), config) {
        Ok(orrery) => orrery,
        Err(err) => {
            log::error!("catalogue rejected: {err}");
            std::process::exit(1);
        }
    };

    let mut camera = PerspectiveCamera::new(
        Vec2::new(1280.0, 720.0),
        std::f32::consts::FRAC_PI_3,
        0.01,
        1.0e6,
    );
    camera.look_at(Vec3::new(0.0, 400.0, 1600.0), Vec3::ZERO, Vec3::Y);

    for frame in 0..args.frames {
        let timestamp = frame as f64 * args.dt;

        if frame == 60 {
            if let Some(name) = &args.focus {
                orrery.set_focus(name);
            }
        }

        orrery.update(timestamp, &camera);

        for event in orrery.events() {
            log::info!("event: {event:?}");
        }

        if frame % 60 == 0 {
            let focus = orrery
                .current_focus()
                .map(|b| b.name.as_str())
                .unwrap_or("-");
            println!(
                "t={timestamp:6.2}s sim={:10.0}s focus={focus:8} markers={}",
                orrery.elapsed_sim_time(),
                orrery.visible().len(),
            );
            for v in orrery.visible() {
                let body = orrery.body(v.body);
                println!(
                    "    {:10} screen=({:7.1},{:7.1}) depth={:8.2}",
                    body.name, v.screen.x, v.screen.y, v.depth,
                );
            }
        }
    }
}
