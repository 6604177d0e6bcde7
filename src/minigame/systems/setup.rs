//! Scene setup systems
//!
//! Camera, light, materials and the on-screen roll UI. The physics side of
//! the bowl and dice is spawned by the core plugin; the systems here only
//! dress those entities with meshes once they appear.

use bevy::prelude::*;

use crate::minigame::types::*;

/// Mesh and material handles shared by every die.
#[derive(Resource)]
pub struct DiceVisuals {
    pub mesh: Handle<Mesh>,
    pub first: Handle<StandardMaterial>,
    pub second: Handle<StandardMaterial>,
}

impl DiceVisuals {
    pub fn material(&self, slot: DieSlot) -> Handle<StandardMaterial> {
        match slot {
            DieSlot::First => self.first.clone(),
            DieSlot::Second => self.second.clone(),
        }
    }
}

/// Main setup system - camera, lights and shared die visuals
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.5, 3.5).looking_at(Vec3::new(0.0, 0.3, 0.0), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(3.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    let die_material = |materials: &mut Assets<StandardMaterial>, slot: DieSlot| {
        materials.add(StandardMaterial {
            base_color: slot.color(),
            perceptual_roughness: 0.4,
            ..default()
        })
    };

    commands.insert_resource(DiceVisuals {
        mesh: meshes.add(Cuboid::new(DIE_SIZE, DIE_SIZE, DIE_SIZE)),
        first: die_material(&mut materials, DieSlot::First),
        second: die_material(&mut materials, DieSlot::Second),
    });
}

/// Give newly spawned dice their mesh and material.
pub fn attach_die_visuals(
    mut commands: Commands,
    visuals: Option<Res<DiceVisuals>>,
    dice_query: Query<(Entity, &Die), Added<Die>>,
) {
    let Some(visuals) = visuals else {
        return;
    };

    for (entity, die) in dice_query.iter() {
        commands.entity(entity).insert((
            Mesh3d(visuals.mesh.clone()),
            MeshMaterial3d(visuals.material(die.slot)),
        ));
    }
}

/// Give the bowl a glazed floor and wall meshes matching its colliders.
pub fn attach_bowl_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    bowl_query: Query<Entity, Added<Bowl>>,
) {
    for bowl in bowl_query.iter() {
        let glaze = materials.add(StandardMaterial {
            base_color: Color::srgb(0.12, 0.1, 0.1),
            reflectance: 0.6,
            perceptual_roughness: 0.25,
            ..default()
        });

        let floor_mesh = meshes.add(Cylinder::new(
            BOWL_RADIUS + BOWL_WALL_THICKNESS,
            BOWL_FLOOR_THICKNESS,
        ));
        let segment_length =
            (std::f32::consts::TAU * BOWL_RADIUS) / BOWL_WALL_SEGMENTS as f32 + BOWL_WALL_THICKNESS;
        let wall_mesh = meshes.add(Cuboid::new(
            BOWL_WALL_THICKNESS,
            BOWL_WALL_HEIGHT,
            segment_length,
        ));

        commands.entity(bowl).with_children(|parent| {
            parent.spawn((
                Mesh3d(floor_mesh),
                MeshMaterial3d(glaze.clone()),
                Transform::from_xyz(0.0, -BOWL_FLOOR_THICKNESS / 2.0, 0.0),
            ));

            for i in 0..BOWL_WALL_SEGMENTS {
                let angle = (i as f32 / BOWL_WALL_SEGMENTS as f32) * std::f32::consts::TAU;
                let radius = BOWL_RADIUS + BOWL_WALL_THICKNESS / 2.0;
                parent.spawn((
                    Mesh3d(wall_mesh.clone()),
                    MeshMaterial3d(glaze.clone()),
                    Transform::from_xyz(
                        angle.cos() * radius,
                        BOWL_WALL_HEIGHT / 2.0,
                        angle.sin() * radius,
                    )
                    .with_rotation(Quat::from_rotation_y(-angle)),
                ));
            }
        });
    }
}

/// Status line, result line, loading indicator and roll button.
pub fn setup_roll_ui(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(24.0),
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                ResultText,
            ));

            parent.spawn((
                Text::new(STATUS_IDLE),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
                StatusText,
            ));

            parent.spawn((
                Text::new("..."),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.8, 0.3)),
                Visibility::Hidden,
                LoadingIndicator,
            ));

            parent
                .spawn((
                    Button,
                    Node {
                        width: Val::Px(180.0),
                        height: Val::Px(56.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BorderRadius::all(Val::Px(28.0)),
                    BackgroundColor(ROLL_BUTTON_ENABLED),
                    RollButton::default(),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Roll"),
                        TextFont {
                            font_size: 26.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}
