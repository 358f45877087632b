//! Flat per-particle buffers for the instanced-quad renderer.
//!
//! The JS host views positions/sizes/colors through ptr/len pairs as
//! Float32Arrays and feeds them straight to the instanced draw call.
//! Layer order is preserved, hidden layers and invisible particles are
//! skipped.

use super::EngineCore;

pub(super) fn render_collect(core: &mut EngineCore) -> usize {
    core.render.positions.clear();
    core.render.sizes.clear();
    core.render.colors.clear();

    let mut count = 0usize;

    for particle in core.layers.visible_particles() {
        let position = particle.position();
        let size = particle.size();
        let color = particle.parsed_color();

        core.render.positions.push(position.x);
        core.render.positions.push(position.y);
        core.render.sizes.push(size.x);
        core.render.sizes.push(size.y);
        core.render.colors.extend_from_slice(&color);
        count += 1;
    }

    core.render.count = count;
    count
}
