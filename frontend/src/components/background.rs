use yew::prelude::*;

use crate::config;

/// One decorative floating dot. Positions are percentages of the section.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub left: f64,
    pub top: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl Dot {
    /// Draws a dot from a source of uniform samples in `[0, 1)`.
    pub fn sample(random: &mut impl FnMut() -> f64) -> Self {
        Self {
            left: random() * 100.0,
            top: random() * 100.0,
            duration_secs: 5.0 + random() * 10.0,
            delay_secs: -random() * 5.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation: float {:.2}s linear infinite; animation-delay: {:.2}s;",
            self.left, self.top, self.duration_secs, self.delay_secs
        )
    }
}

pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Dot> {
    (0..count).map(|_| Dot::sample(&mut random)).collect()
}

#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    // Placed once per instance so re-renders don't make the dots jump.
    let dots = use_state(|| scatter(config::BACKGROUND_DOTS, web_sys::js_sys::Math::random));

    html! {
        <div class="animated-background">
            <div class="dot-field">
                { for dots.iter().map(|dot| html! {
                    <div class="floating-dot" style={dot.style()}></div>
                }) }
            </div>
            <style>
                {r#"
                .animated-background {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .dot-field {
                    position: absolute;
                    width: 100%;
                    height: 100%;
                }
                .floating-dot {
                    position: absolute;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(59, 130, 246, 0.05);
                }
                @keyframes float {
                    0% { transform: translateY(0) translateX(0); }
                    50% { transform: translateY(-20px) translateX(10px); }
                    100% { transform: translateY(0) translateX(0); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut values = values.into_iter().cycle();
        move || values.next().unwrap_or(0.0)
    }

    #[test]
    fn dot_maps_samples_into_ranges() {
        let dot = Dot::sample(&mut sequence(vec![0.25, 0.5, 0.5, 0.2]));
        assert_eq!(dot.left, 25.0);
        assert_eq!(dot.top, 50.0);
        assert_eq!(dot.duration_secs, 10.0);
        assert_eq!(dot.delay_secs, -1.0);
    }

    #[test]
    fn scatter_respects_count_and_bounds() {
        let dots = scatter(config::BACKGROUND_DOTS, sequence(vec![0.0, 0.31, 0.77, 0.999, 0.5]));
        assert_eq!(dots.len(), 20);
        for dot in &dots {
            assert!((0.0..100.0).contains(&dot.left));
            assert!((0.0..100.0).contains(&dot.top));
            assert!((5.0..15.0).contains(&dot.duration_secs));
            assert!(dot.delay_secs <= 0.0 && dot.delay_secs > -5.0);
        }
    }

    #[test]
    fn style_carries_position_and_animation() {
        let dot = Dot { left: 12.5, top: 80.0, duration_secs: 7.25, delay_secs: -2.0 };
        assert_eq!(
            dot.style(),
            "left: 12.50%; top: 80.00%; animation: float 7.25s linear infinite; animation-delay: -2.00s;"
        );
    }
}
