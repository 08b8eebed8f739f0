use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;
use crate::simulation::history::TrajectoryHistory;

/// Component tagging each disc with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Shared frame counter into the precomputed history
#[derive(Resource)]
struct FrameCursor(usize);

/// World-space → screen-space scaling factor for positions
#[derive(Resource)]
struct ViewScale(f32);

/// Screen half-extent the scenario's view bound maps to, in px
const VIEW_HALF_EXTENT: f32 = 320.0;

/// On-screen radius of the central body disc, in px
const CENTRAL_RADIUS: f32 = 12.0;

pub fn run_2d(scenario: Scenario, history: TrajectoryHistory) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} bodies, {} frames",
        scenario.system.bodies.len(),
        history.steps()
    );

    // Fit the suggested view bound into the fixed screen half-extent
    let scale = if scenario.view_bound > 0.0 {
        VIEW_HALF_EXTENT / scenario.view_bound as f32
    } else {
        1.0
    };

    App::new()
        .insert_resource(scenario)
        .insert_resource(history)
        .insert_resource(FrameCursor(0))
        .insert_resource(ViewScale(scale))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (advance_frame_system, sync_markers_system, draw_trails_system))
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    history: Res<TrajectoryHistory>,
    view: Res<ViewScale>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera on a black sky
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..Default::default()
        },
        ..Default::default()
    });

    // Central body: fixed yellow disc at the origin
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(CENTRAL_RADIUS))),
        material: materials.add(ColorMaterial::from(color_from_name("yellow"))),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        // Marker radius follows the data set's size/10 convention, with a
        // floor so small bodies are still visible
        let radius_screen = ((body.appearance.size / 10.0) as f32).max(1.0) * 2.0;

        // First recorded sample, so the disc starts where frame 0 plays back
        let p0 = history.track(i).first().copied().unwrap_or(body.x);
        let x = p0.x as f32 * view.0;
        let y = p0.y as f32 * view.0;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(color_from_name(&body.appearance.color))),
                transform: Transform::from_xyz(x, y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Advance the shared frame counter, wrapping so the animation loops
fn advance_frame_system(history: Res<TrajectoryHistory>, mut cursor: ResMut<FrameCursor>) {
    let frames = history.steps();
    if frames == 0 { // nothing recorded, nothing to play
        return;
    }
    cursor.0 = (cursor.0 + 1) % frames;
}

/// Place each body disc at its recorded position for the current frame
fn sync_markers_system(
    history: Res<TrajectoryHistory>,
    cursor: Res<FrameCursor>,
    view: Res<ViewScale>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(p) = history.track(*i).get(cursor.0) {
            transform.translation.x = (p.x as f32) * view.0;
            transform.translation.y = (p.y as f32) * view.0;
        }
    }
}

/// Draw each body's trail: the track prefix up to the current frame
fn draw_trails_system(
    scenario: Res<Scenario>,
    history: Res<TrajectoryHistory>,
    cursor: Res<FrameCursor>,
    view: Res<ViewScale>,
    mut gizmos: Gizmos,
) {
    let s = view.0;
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let color = color_from_name(&body.appearance.color);
        gizmos.linestrip_2d(
            history
                .prefix(i, cursor.0)
                .iter()
                .map(|p| Vec2::new(p.x as f32 * s, p.y as f32 * s)),
            color,
        );
    }
}

/// Map a scenario color name to a screen color; unknown names render white
fn color_from_name(name: &str) -> Color {
    match name {
        "gray" | "grey" => Color::srgb(0.55, 0.55, 0.55),
        "orange" => Color::srgb(1.0, 0.65, 0.1),
        "blue" => Color::srgb(0.25, 0.45, 1.0),
        "red" => Color::srgb(1.0, 0.25, 0.15),
        "yellow" => Color::srgb(1.0, 0.9, 0.2),
        "green" => Color::srgb(0.25, 0.8, 0.25),
        "white" => Color::WHITE,
        _ => Color::WHITE,
    }
}
