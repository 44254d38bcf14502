use std::time::Duration;

use anyhow::Result;
use tokio::time::{interval, MissedTickBehavior};

use foldscroll_core::{BufferWindow, ScrollConfig};
use foldscroll_motion::{Frame, ScrollAnimator, ScrollConfigExt};

use crate::amount::ScrollAmount;

pub async fn run(mut window: BufferWindow, amount: ScrollAmount, scroll: ScrollConfig) -> Result<()> {
    let tick = scroll.animation_tick_duration();
    let mut animator = ScrollAnimator::new(scroll);
    let lines = amount.lines(&window);
    animator.scroll_by(&mut window, lines);

    let frames = drive(&mut window, &mut animator, tick, |frame| {
        println!("{}", serde_json::to_string(frame)?);
        Ok(())
    })
    .await?;

    tracing::info!(frames, lines, "Animation finished");
    Ok(())
}

/// Update the animator once per tick until it settles. Returns the frame count.
async fn drive<F>(
    window: &mut BufferWindow,
    animator: &mut ScrollAnimator,
    tick: Duration,
    mut on_frame: F,
) -> Result<usize>
where
    F: FnMut(&Frame) -> Result<()>,
{
    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frames = 0usize;
    loop {
        ticker.tick().await;
        let frame = animator.update(window);
        on_frame(&frame)?;
        frames += 1;

        if frame.done && !animator.needs_update() {
            return Ok(frames);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldscroll_core::{ClosedFolds, EasingType, ViewAccess};

    #[tokio::test]
    async fn test_drive_until_settled() {
        let mut window = BufferWindow::new(100, 10)
            .with_folds(ClosedFolds::from_ranges([(5, 9)]).unwrap());
        let mut animator = ScrollAnimator::new(ScrollConfig {
            animation_duration_ms: 40,
            easing: EasingType::Linear,
            ..Default::default()
        });
        animator.scroll_by(&mut window, 6);

        let mut seen = Vec::new();
        let frames = drive(&mut window, &mut animator, Duration::from_millis(5), |frame| {
            seen.push(*frame);
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(frames, seen.len());
        assert!(frames > 1);
        assert!(seen.iter().all(|f| !(6..=9).contains(&f.topline)));
        let last = seen.last().unwrap();
        assert!(last.done);
        assert_eq!(last.topline, 11);
        assert_eq!(window.view().topline, 11);
    }

    #[tokio::test]
    async fn test_instant_scroll_single_frame() {
        let mut window = BufferWindow::new(100, 10);
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        animator.scroll_by(&mut window, 4);

        let frames = drive(&mut window, &mut animator, Duration::from_millis(1), |_| Ok(()))
            .await
            .unwrap();
        assert_eq!(frames, 1);
        assert_eq!(window.view().topline, 5);
    }

    #[tokio::test]
    async fn test_high_fps_tick_is_usable() {
        let config = ScrollConfig {
            animation_fps: 2000,
            animation_duration_ms: 10,
            ..Default::default()
        };
        let tick = config.animation_tick_duration();
        assert!(!tick.is_zero());

        let mut window = BufferWindow::new(100, 10);
        let mut animator = ScrollAnimator::new(config);
        animator.scroll_by(&mut window, 3);
        drive(&mut window, &mut animator, tick, |_| Ok(())).await.unwrap();
        assert_eq!(window.view().topline, 4);
    }
}
