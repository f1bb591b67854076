use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use term_size::dimensions;

pub mod fetch;
pub mod files;

pub async fn pretty_sleep(duration: Duration) {
    let total_secs = duration.as_secs();

    // Sub-second waits are not worth a progress bar.
    if total_secs == 0 {
        tokio::time::sleep(duration).await;
        return;
    }

    let pb = ProgressBar::new(total_secs);

    let term_width = dimensions().map(|(w, _)| w - 2).unwrap_or(40);
    let bar_width = if term_width > 20 { term_width - 20 } else { 20 };

    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:{bar_width}.cyan/blue}}] {{pos}}/{{len}}s"
            ))
            .expect("Invalid progress bar template.")
            .progress_chars("#>-"),
    );

    let step = Duration::from_secs(1);

    for _ in 0..total_secs {
        pb.inc(1);
        tokio::time::sleep(step).await;
    }

    let remainder = duration - Duration::from_secs(total_secs);
    if !remainder.is_zero() {
        tokio::time::sleep(remainder).await;
    }

    pb.finish_and_clear();
}
