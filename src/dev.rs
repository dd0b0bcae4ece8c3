use std::time::Instant;

use log::info;

pub fn measure<F, R>(name: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let now = Instant::now();
    let result = f();
    let elapsed_ms = now.elapsed().as_secs_f64() * 1000.0;

    if elapsed_ms < 1000.0 {
        info!("{} took {:.3} ms", name, elapsed_ms);
    } else {
        info!("{} took {:.3} s", name, elapsed_ms / 1000.0);
    }
    result
}
