use yew::prelude::*;

/// One stop on a looping motion path. `at` is the loop fraction (0.0..=1.0).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Keyframe {
    pub at: f32,
    pub x_px: f32,
    pub y_px: f32,
    pub rotate_deg: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ShapeKind {
    Dot,
    Diamond,
    Triangle,
    Hexagon,
    Bar,
}

/// A decorative overlay element: fixed geometry plus a motion path replayed
/// forever. Pure data, nothing here reacts to the page.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ShapeSpec {
    /// Unique name, used for both the CSS class and its keyframes.
    pub name: &'static str,
    pub kind: ShapeKind,
    pub width_px: f32,
    pub height_px: f32,
    /// Anchored position inside the section, e.g. "top: 5rem; left: 2.5rem;".
    pub anchor: &'static str,
    pub color: &'static str,
    pub opacity: f32,
    pub path: &'static [Keyframe],
    pub period_s: f32,
    pub delay_s: f32,
}

fn geometry(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Dot => "border-radius: 50%;",
        ShapeKind::Diamond => "clip-path: polygon(50% 0%, 100% 50%, 50% 100%, 0% 50%);",
        ShapeKind::Triangle => "clip-path: polygon(50% 0%, 0% 100%, 100% 100%);",
        ShapeKind::Hexagon => {
            "clip-path: polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%);"
        }
        ShapeKind::Bar => "",
    }
}

/// Renders a motion path as an @keyframes block.
pub fn keyframes_css(name: &str, path: &[Keyframe]) -> String {
    let mut css = format!("@keyframes {}-path {{\n", name);
    for stop in path {
        css.push_str(&format!(
            "    {:.0}% {{ transform: translate({}px, {}px) rotate({}deg) scale({}); }}\n",
            stop.at * 100.0,
            stop.x_px,
            stop.y_px,
            stop.rotate_deg,
            stop.scale,
        ));
    }
    css.push_str("}\n");
    css
}

/// Renders the element rule that binds a shape to its looping path.
pub fn shape_css(spec: &ShapeSpec) -> String {
    format!(
        ".{name} {{\n    position: absolute;\n    {anchor}\n    width: {w}px;\n    height: {h}px;\n    background: {color};\n    opacity: {opacity};\n    {geometry}\n    animation: {name}-path {period}s ease-in-out {delay}s infinite;\n}}\n",
        name = spec.name,
        anchor = spec.anchor,
        w = spec.width_px,
        h = spec.height_px,
        color = spec.color,
        opacity = spec.opacity,
        geometry = geometry(spec.kind),
        period = spec.period_s,
        delay = spec.delay_s,
    )
}

#[derive(Properties, PartialEq)]
pub struct FloatingShapesProps {
    pub shapes: &'static [ShapeSpec],
}

/// Overlay of continuously drifting shapes. The layer is `aria-hidden` and
/// takes no pointer events, so it can never get between the user and the
/// real content. The CSS engine drives the loops; unmounting the component
/// removes every shape and leaves nothing running.
#[function_component(FloatingShapes)]
pub fn floating_shapes(props: &FloatingShapesProps) -> Html {
    let css: String = props
        .shapes
        .iter()
        .map(|spec| format!("{}{}", keyframes_css(spec.name, spec.path), shape_css(spec)))
        .collect();

    html! {
        <div class="floating-shapes" aria-hidden="true">
            <style>{ css }</style>
            { for props.shapes.iter().map(|spec| html! { <div class={spec.name}></div> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRIFT: &[Keyframe] = &[
        Keyframe { at: 0.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
        Keyframe { at: 0.5, x_px: 10.0, y_px: -20.0, rotate_deg: 0.0, scale: 1.0 },
        Keyframe { at: 1.0, x_px: 0.0, y_px: 0.0, rotate_deg: 0.0, scale: 1.0 },
    ];

    const SHAPE: ShapeSpec = ShapeSpec {
        name: "test-dot",
        kind: ShapeKind::Dot,
        width_px: 16.0,
        height_px: 16.0,
        anchor: "top: 5rem; left: 2.5rem;",
        color: "#22d3ee",
        opacity: 0.2,
        path: DRIFT,
        period_s: 4.0,
        delay_s: 1.5,
    };

    #[test]
    fn keyframes_render_each_stop_as_a_percent_block() {
        let css = keyframes_css("test-dot", DRIFT);
        assert!(css.starts_with("@keyframes test-dot-path {"));
        assert!(css.contains("0% { transform: translate(0px, 0px) rotate(0deg) scale(1); }"));
        assert!(css.contains("50% { transform: translate(10px, -20px) rotate(0deg) scale(1); }"));
        assert!(css.contains("100% { transform: translate(0px, 0px) rotate(0deg) scale(1); }"));
    }

    #[test]
    fn shape_rule_loops_forever_with_period_and_phase() {
        let css = shape_css(&SHAPE);
        assert!(css.contains("animation: test-dot-path 4s ease-in-out 1.5s infinite;"));
        assert!(css.contains("opacity: 0.2;"));
        assert!(css.contains("top: 5rem; left: 2.5rem;"));
    }

    #[test]
    fn geometry_follows_the_shape_kind() {
        assert!(geometry(ShapeKind::Dot).contains("border-radius"));
        assert!(geometry(ShapeKind::Diamond).contains("polygon(50% 0%, 100% 50%"));
        assert!(geometry(ShapeKind::Triangle).contains("polygon(50% 0%, 0% 100%"));
        assert!(geometry(ShapeKind::Hexagon).contains("polygon(25% 0%"));
        assert!(geometry(ShapeKind::Bar).is_empty());
    }
}
