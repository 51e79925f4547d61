//! A scripted visit to the spotlight carousel, replayed on virtual time.

use std::time::Duration;

use legiguard_components::{
    CarouselError, Instant,
    carousel::{
        CarouselArgs, CarouselController, Direction, IndexChange, Indicators, InteractionRegion,
        TweenFrame, TweenSurface, ViewportGeometry,
    },
    testimonial::{self, Testimonial},
};
use tracing::{debug, info, instrument};

const CARD_WIDTH: f32 = 640.0;
const CARD_GAP: f32 = 24.0;
const VIEWPORT_WIDTH: f32 = 640.0;

/// Something the visitor does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cue {
    Hover,
    Leave,
    TouchStart,
    Drag(f32),
    TouchEnd,
    Dot(usize),
    Arrow(Direction),
}

/// Replays a script of cues against a carousel over the spotlight cards.
#[derive(Clone, Debug)]
pub struct Session {
    cards: &'static [Testimonial],
    script: Vec<(Duration, Cue)>,
    frame: Duration,
    length: Duration,
}

/// What happened during a session.
#[derive(Clone, Debug, Default)]
pub struct SessionReport {
    pub changes: Vec<IndexChange>,
    pub final_index: usize,
    pub frames: u64,
}

impl Session {
    /// One frame at 60Hz, rounded down to whole milliseconds.
    pub const FRAME: Duration = Duration::from_millis(16);

    pub fn new(cards: &'static [Testimonial], length: Duration) -> Self {
        Self {
            cards,
            script: Vec::new(),
            frame: Self::FRAME,
            length,
        }
    }

    /// Hover, a swipe back to the first card, a dot click and an arrow.
    pub fn scripted(length: Duration) -> Self {
        Self::new(testimonial::spotlight(), length)
            .cue(7_000, Cue::Hover)
            .cue(9_500, Cue::Leave)
            .cue(11_000, Cue::TouchStart)
            .cue(11_050, Cue::Drag(-220.0))
            .cue(11_100, Cue::Drag(-220.0))
            .cue(11_150, Cue::Drag(-220.0))
            .cue(11_300, Cue::TouchEnd)
            .cue(14_000, Cue::Dot(2))
            .cue(16_000, Cue::Arrow(Direction::Previous))
    }

    /// Adds a cue `at_ms` milliseconds into the session.
    pub fn cue(mut self, at_ms: u64, cue: Cue) -> Self {
        self.script.push((Duration::from_millis(at_ms), cue));
        self.script.sort_by_key(|(at, _)| *at);
        self
    }

    #[instrument(skip(self), fields(cards = self.cards.len(), length = ?self.length))]
    pub fn run(&self, start: Instant) -> Result<SessionReport, CarouselError> {
        let mut carousel = CarouselController::mount(
            self.cards.len(),
            TweenSurface::default(),
            CarouselArgs::default(),
            start,
        )?;
        carousel.update_geometry(ViewportGeometry::uniform(
            self.cards.len(),
            CARD_WIDTH,
            CARD_GAP,
            0.0,
            VIEWPORT_WIDTH,
        )?)?;
        self.announce(&carousel);

        let mut report = SessionReport::default();
        let mut cues = self.script.iter().peekable();
        let mut seen_revision = carousel.revision();
        let mut elapsed = Duration::ZERO;

        while elapsed < self.length {
            let now = start + elapsed;
            while let Some((_, cue)) = cues.next_if(|(at, _)| *at <= elapsed) {
                debug!(?cue, at = ?elapsed, "cue");
                apply(&mut carousel, *cue, now);
            }

            match carousel.surface_mut().advance(now) {
                TweenFrame::Idle => {}
                TweenFrame::Scrolled => carousel.on_scroll(now),
                TweenFrame::Settled => {
                    carousel.on_scroll(now);
                    carousel.on_scroll_end(now);
                }
            }
            carousel.tick(now);

            if carousel.revision() != seen_revision {
                seen_revision = carousel.revision();
                report.changes.extend(carousel.last_change());
                self.announce(&carousel);
            }

            report.frames += 1;
            elapsed += self.frame;
        }

        report.final_index = carousel.active_index();
        carousel.dispose();
        Ok(report)
    }

    fn announce(&self, carousel: &CarouselController<TweenSurface>) {
        let Some(card) = self.cards.get(carousel.active_index()) else {
            return;
        };
        info!(
            dots = %render_dots(&carousel.indicators()),
            industry = %card.industry(),
            avatar = %card.avatar_path(),
            "{}",
            card.attribution()
        );
    }
}

fn apply(carousel: &mut CarouselController<TweenSurface>, cue: Cue, now: Instant) {
    match cue {
        Cue::Hover => carousel.pointer_enter(InteractionRegion::Viewport, now),
        Cue::Leave => carousel.pointer_leave(InteractionRegion::Viewport, now),
        Cue::TouchStart => carousel.touch_start(now),
        Cue::Drag(delta) => {
            if carousel.surface_mut().drag_by(delta) {
                carousel.on_scroll(now);
            }
        }
        Cue::TouchEnd => carousel.touch_end(now),
        // Dot indices are small; they come from the indicator list.
        Cue::Dot(index) => carousel.go_to(index as isize, now),
        Cue::Arrow(direction) => carousel.step(direction, now),
    }
}

/// Renders dots as `●○○`.
pub fn render_dots(dots: &Indicators) -> String {
    dots.iter()
        .map(|dot| if dot.is_active { '●' } else { '○' })
        .collect()
}

#[cfg(test)]
mod tests {
    use legiguard_components::carousel::{ChangeCause, indicators};

    use super::*;

    #[test]
    fn test_scripted_session_changes() {
        let report = Session::scripted(Duration::from_secs(20))
            .run(Instant::now())
            .unwrap();

        let steps: Vec<_> = report
            .changes
            .iter()
            .map(|change| (change.from, change.to, change.cause))
            .collect();
        assert_eq!(
            steps,
            vec![
                (0, 1, ChangeCause::Intent),
                (1, 0, ChangeCause::Observation),
                (0, 2, ChangeCause::Intent),
                (2, 1, ChangeCause::Intent),
                (1, 2, ChangeCause::Intent),
            ]
        );
        assert_eq!(report.final_index, 2);
        assert_eq!(report.frames, 1250);
    }

    #[test]
    fn test_arrows_wrap_around_spotlight() {
        let report = Session::new(testimonial::spotlight(), Duration::from_secs(2))
            .cue(100, Cue::Arrow(Direction::Previous))
            .cue(900, Cue::Arrow(Direction::Next))
            .run(Instant::now())
            .unwrap();

        assert_eq!(report.changes.len(), 2);
        assert_eq!(report.changes[0].to, 2);
        assert_eq!(report.final_index, 0);
    }

    #[test]
    fn test_render_dots() {
        assert_eq!(render_dots(&indicators(1, 3)), "○●○");
    }
}
