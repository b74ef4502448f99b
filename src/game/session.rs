// One running game: its entities, their clips and the per-tick pipeline

use std::rc::Rc;

use log::{debug, info};

use super::characters::{
    AnimatedEntity, Animation, AnimationError, AnimationLibrary, CharacterController,
    ControllerError, Entity, FrameRef, Intent, StateClips, StaticEntity,
};
use super::config::{ClipConfig, GameConfig};
use crate::engine::assets::{FrameSheet, SheetError, TextureInfo};
use crate::engine::input::{Action, InputConfig, InputManager};
use crate::engine::renderer::{Color, DrawList, RenderSink};

/// Startup errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error(transparent)]
    Animation(#[from] AnimationError),

    #[error(transparent)]
    Controller(#[from] ControllerError),
}

pub struct Session {
    library: AnimationLibrary,
    /// Updated and drawn in order, player last
    entities: Vec<Entity>,
    input: InputManager,
    draw_list: DrawList,
    background: Color,
    paused: bool,
    quit_requested: bool,
}

impl Session {
    /// Slice the player sheet, author its clips and place props and player
    pub fn new(config: &GameConfig, texture: TextureInfo) -> Result<Self, SessionError> {
        let sheet = Rc::new(FrameSheet::new(
            texture,
            config.sheet_rows,
            config.sheet_columns,
        )?);
        info!(
            "Sliced {} into {} frames of {:?}",
            config.sheet_path,
            sheet.frame_count(),
            sheet.cell_size()
        );

        let mut library = AnimationLibrary::new();
        let mut author = |clip: &ClipConfig| -> Result<_, AnimationError> {
            let animation = Animation::from_indices(&sheet, clip.frames, clip.switch_interval)?;
            Ok(library.insert(animation))
        };

        let clips = StateClips::new(
            author(&config.clips.run_left)?,
            author(&config.clips.run_right)?,
            author(&config.clips.stand_left)?,
            author(&config.clips.stand_right)?,
        );

        let mut entities = Vec::with_capacity(config.props.len() + 1);
        for prop in &config.props {
            let entity = match prop.clip.frames {
                [] => return Err(AnimationError::EmptyAnimation.into()),
                [index] => Entity::Static(StaticEntity::new(
                    FrameRef::new(&sheet, *index)?,
                    prop.size,
                    prop.position,
                )),
                _ => Entity::Animated(AnimatedEntity::new(
                    prop.size,
                    prop.position,
                    author(&prop.clip)?,
                )),
            };
            entities.push(entity);
        }
        if !config.props.is_empty() {
            debug!("Placed {} props", config.props.len());
        }

        let player = CharacterController::new(
            config.body_size,
            config.spawn,
            clips,
            config.run_speed,
            &library,
        )?;
        entities.push(Entity::Controlled(player));

        Ok(Self {
            library,
            entities,
            input: InputManager::new(InputConfig::from_bindings(&config.key_bindings)),
            draw_list: DrawList::new(),
            background: config.background,
            paused: false,
            quit_requested: false,
        })
    }

    /// Run one tick: sample intent, move, animate, hand off for drawing
    pub fn tick(&mut self, dt: f32) -> Result<(), AnimationError> {
        if dt < 0.0 {
            log::warn!("Negative frame time {}, treating as zero", dt);
        }
        let dt = dt.max(0.0);

        let input = self.input.state();
        if input.just_pressed(Action::Quit) {
            self.quit_requested = true;
        }
        if input.just_pressed(Action::Pause) {
            self.paused = !self.paused;
            info!("{}", if self.paused { "Paused" } else { "Unpaused" });
        }

        let intent = Intent::from_input(input);
        self.input.update();

        for entity in &mut self.entities {
            if let Entity::Controlled(player) = entity {
                if player.apply(intent, dt) {
                    debug!("Player clip swapped for {:?}", player.state());
                }
            }
            entity.update(dt, &mut self.library)?;
        }

        self.draw_list.clear(self.background);
        for entity in &self.entities {
            entity.render(&mut self.draw_list);
        }
        log::trace!("{} draw commands queued", self.draw_list.command_count());

        Ok(())
    }

    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn player(&self) -> Option<&CharacterController> {
        self.entities.iter().find_map(Entity::controller)
    }

    pub fn library(&self) -> &AnimationLibrary {
        &self.library
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Whether the player asked to freeze time. The frame clock follows this.
    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{FrameRegion, TextureHandle};
    use crate::engine::input::InputSource;
    use crate::game::characters::CharacterState;
    use crate::game::config::PropConfig;
    use approx::assert_relative_eq;
    use glam::Vec2;
    use winit::keyboard::KeyCode;

    fn texture() -> TextureInfo {
        TextureInfo::new(TextureHandle::for_path("images/maincharacter.png"), 256, 128)
    }

    fn session() -> Session {
        Session::new(&GameConfig::default(), texture()).unwrap()
    }

    fn press(session: &mut Session, key: KeyCode, pressed: bool) {
        session
            .input_mut()
            .process_input(InputSource::key(key), pressed, false);
    }

    #[test]
    fn test_first_tick_draws_standing_right() {
        let mut session = session();
        session.tick(0.0).unwrap();

        let list = session.draw_list();
        assert_eq!(list.clear_color(), Some(Color::rgb(90, 90, 90)));
        assert_eq!(list.command_count(), 1);
        // Frame 4: first cell of the second row
        assert_eq!(list.commands()[0].region, FrameRegion::new(0, 64, 64, 64));
        assert_eq!(list.commands()[0].position, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_held_key_runs_left() {
        let mut session = session();
        session
            .input_mut()
            .process_input(InputSource::key(KeyCode::KeyA), true, false);

        session.tick(0.02).unwrap();
        assert_eq!(session.player().unwrap().state(), CharacterState::RunningLeft);
        assert_relative_eq!(session.player().unwrap().position().x, 40.0, epsilon = 1e-4);

        session
            .input_mut()
            .process_input(InputSource::key(KeyCode::KeyA), false, false);
        session.tick(0.02).unwrap();
        assert_eq!(session.player().unwrap().state(), CharacterState::StandingLeft);
        assert_eq!(session.player().unwrap().swap_count(), 2);
    }

    #[test]
    fn test_quit_key() {
        let mut session = session();
        session.tick(0.0).unwrap();
        assert!(!session.quit_requested());

        session
            .input_mut()
            .process_input(InputSource::key(KeyCode::Escape), true, false);
        session.tick(0.0).unwrap();
        assert!(session.quit_requested());
    }

    #[test]
    fn test_negative_dt_does_not_move() {
        let mut session = session();
        session
            .input_mut()
            .process_input(InputSource::key(KeyCode::KeyD), true, false);
        session.tick(-1.0).unwrap();

        assert_eq!(session.player().unwrap().state(), CharacterState::RunningRight);
        assert_relative_eq!(session.player().unwrap().position().x, 50.0);
    }

    #[test]
    fn test_bad_grid_fails_startup() {
        let mut config = GameConfig::default();
        config.sheet_rows = 0;
        let texture = TextureInfo::new(TextureHandle::for_path("x.png"), 256, 128);

        assert!(matches!(
            Session::new(&config, texture),
            Err(SessionError::Sheet(SheetError::InvalidGrid { .. }))
        ));
    }

    #[test]
    fn test_clip_outside_sheet_fails_startup() {
        let mut config = GameConfig::default();
        config.sheet_columns = 2;
        let texture = TextureInfo::new(TextureHandle::for_path("x.png"), 256, 128);

        assert!(matches!(
            Session::new(&config, texture),
            Err(SessionError::Animation(AnimationError::Sheet(
                SheetError::IndexOutOfRange { .. }
            )))
        ));
    }

    #[test]
    fn test_library_holds_four_clips() {
        assert_eq!(session().library().len(), 4);
    }

    #[test]
    fn test_player_is_a_controlled_entity() {
        let session = session();

        assert_eq!(session.entities().len(), 1);
        assert!(matches!(session.entities()[0], Entity::Controlled(_)));
        assert_eq!(session.player().unwrap().state(), CharacterState::StandingRight);
    }

    #[test]
    fn test_props_are_drawn_before_player() {
        let mut config = GameConfig::default();
        config.props = vec![
            PropConfig {
                clip: ClipConfig::new(&[0]),
                size: Vec2::new(20.0, 20.0),
                position: Vec2::new(100.0, 0.0),
            },
            PropConfig {
                clip: ClipConfig::new(&[5, 6]),
                size: Vec2::new(20.0, 20.0),
                position: Vec2::new(200.0, 0.0),
            },
        ];
        let mut session = Session::new(&config, texture()).unwrap();

        assert!(matches!(session.entities()[0], Entity::Static(_)));
        assert!(matches!(session.entities()[1], Entity::Animated(_)));
        assert!(matches!(session.entities()[2], Entity::Controlled(_)));
        // Single-frame props need no clip
        assert_eq!(session.library().len(), 5);

        session.tick(0.1).unwrap();

        let commands = session.draw_list().commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].region, FrameRegion::new(0, 0, 64, 64));
        assert_eq!(commands[0].position, Vec2::new(100.0, 0.0));
        // Animated prop moved on to frame 6
        assert_eq!(commands[1].region, FrameRegion::new(128, 64, 64, 64));
        assert_eq!(commands[2].region, FrameRegion::new(0, 64, 64, 64));
    }

    #[test]
    fn test_empty_prop_fails_startup() {
        let mut config = GameConfig::default();
        config.props = vec![PropConfig {
            clip: ClipConfig::new(&[]),
            size: Vec2::ONE,
            position: Vec2::ZERO,
        }];

        assert!(matches!(
            Session::new(&config, texture()),
            Err(SessionError::Animation(AnimationError::EmptyAnimation))
        ));
    }

    #[test]
    fn test_pause_key_toggles() {
        let mut session = session();

        press(&mut session, KeyCode::KeyP, true);
        session.tick(0.0).unwrap();
        assert!(session.paused());

        // Held key does not toggle again
        session.tick(0.0).unwrap();
        assert!(session.paused());

        press(&mut session, KeyCode::KeyP, false);
        press(&mut session, KeyCode::KeyP, true);
        session.tick(0.0).unwrap();
        assert!(!session.paused());
    }

    #[test]
    fn test_custom_key_bindings() {
        let mut config = GameConfig::default();
        config.key_bindings = vec![(InputSource::key(KeyCode::KeyJ), Action::MoveLeft)];
        let mut session = Session::new(&config, texture()).unwrap();

        press(&mut session, KeyCode::KeyA, true);
        session.tick(0.02).unwrap();
        assert_eq!(session.player().unwrap().state(), CharacterState::StandingRight);

        press(&mut session, KeyCode::KeyJ, true);
        session.tick(0.02).unwrap();
        assert_eq!(session.player().unwrap().state(), CharacterState::RunningLeft);
    }
}
