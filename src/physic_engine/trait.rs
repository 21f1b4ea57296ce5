use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::types::{HexColor, UpdateResult, Vec2, Viewport};

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune du moteur de feux d'artifice : le `Simulator`, le
/// planificateur de lancements et le renderer ne connaissent que ce trait.
///
/// Le renderer n'a qu'un accès en lecture (itérateurs), seule la mise à jour
/// d'un tick modifie les collections.
pub trait PhysicEngine {
    /// Ajuste les dimensions du monde (la surface de rendu a changé de taille).
    fn set_viewport(&mut self, viewport: Viewport);

    fn viewport(&self) -> Viewport;

    /// Met à jour les fusées puis les particules pour un tick.
    fn update(&mut self) -> UpdateResult<'_>;

    /// Lance une fusée depuis le bas de la surface.
    fn launch_rocket(&mut self);

    /// Déclenche une explosion, indépendamment de toute fusée.
    fn spawn_explosion(&mut self, origin: Vec2, color: HexColor, force_heart: bool);

    /// Nombre de fusées non explosées.
    fn active_rockets(&self) -> usize;

    fn active_particles(&self) -> usize;

    /// Vide les deux collections immédiatement.
    fn clear(&mut self);

    fn get_config(&self) -> &PhysicConfig;

    fn iter_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a>;

    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a>;
}
