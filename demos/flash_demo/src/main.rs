use std::thread;

use flash::FlashExt;
use flash_core::*;
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);
const RUN_FOR: Duration = Duration::from_millis(3800);

#[derive(Clone, Copy, Debug)]
enum Action {
    ClickFlash,
    FlipToggle,
}

/// (milliseconds since start, what the "user" does)
const SCRIPT: &[(u64, Action)] = &[
    (0, Action::ClickFlash),
    // Lands in the first dwell: restarts it.
    (500, Action::ClickFlash),
    (1800, Action::FlipToggle),
    // Flipping back is an edge too.
    (2000, Action::FlipToggle),
];

fn app(ping: &EventStream, toggle: &Signal<bool>) -> View {
    Column(Modifier::new()).child((
        Text("Flashing text").flashing("stream", ping),
        Text("Toggled text").flashing("toggle", toggle),
        Button("Flash", {
            let ping = ping.clone();
            move || ping.send()
        }),
    ))
}

fn bar(alpha: f32) -> String {
    let filled = (alpha.clamp(0.0, 1.0) * 20.0).round() as usize;
    format!("[{:<20}]", "#".repeat(filled))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Flash Demo");

    let ping = EventStream::new();
    let toggle = signal(false);
    let mut sched = Scheduler::new();
    let mut script = SCRIPT.iter().peekable();
    let start = Instant::now();

    let mut frame = sched.compose(|_| app(&ping, &toggle));
    while start.elapsed() < RUN_FOR {
        let elapsed = start.elapsed();
        while let Some((at, action)) =
            script.next_if(|(at, _)| Duration::from_millis(*at) <= elapsed)
        {
            log::info!("{at:>5} ms  {action:?}");
            match action {
                Action::ClickFlash => anyhow::ensure!(
                    frame.click("Flash"),
                    "no `Flash` button in frame {}",
                    frame.index
                ),
                Action::FlipToggle => toggle.update(|v| *v = !*v),
            }
        }

        frame = sched.compose(|_| app(&ping, &toggle));
        if frame.index % 6 == 0 {
            let stream_alpha = frame.scene.alpha_of("Flashing text").unwrap_or_default();
            let toggle_alpha = frame.scene.alpha_of("Toggled text").unwrap_or_default();
            log::info!(
                "{:>5} ms  stream {}  toggle {}",
                elapsed.as_millis(),
                bar(stream_alpha),
                bar(toggle_alpha)
            );
        }
        thread::sleep(FRAME);
    }

    sched.shutdown();
    log::info!("Rendered {} frames", sched.frames());
    Ok(())
}
