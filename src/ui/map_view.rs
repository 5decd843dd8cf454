//! Karten-Viewport: zeichnet Hintergrund, Gradnetz, Marker und Cluster per egui-Painter.

use glam::Vec2;

use crate::core::{geo, ClusterSize};
use crate::shared::{MapScene, SceneItem};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(233, 236, 230);
const GRID: egui::Color32 = egui::Color32::from_rgb(200, 204, 196);
const GRID_LABEL: egui::Color32 = egui::Color32::from_rgb(130, 134, 126);

/// Wandelt eine RGBA-Farbe `[0, 1]` in `Color32`.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
        (color[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Abstand der Gradnetz-Linien in Grad für eine Zoomstufe.
pub fn graticule_step(zoom: f64) -> f64 {
    match zoom {
        z if z < 8.0 => 1.0,
        z if z < 10.0 => 0.5,
        z if z < 11.0 => 0.2,
        z if z < 12.5 => 0.1,
        z if z < 14.0 => 0.05,
        _ => 0.01,
    }
}

/// Bildschirm-Radius eines Items in Pixeln.
pub fn item_radius(item: &SceneItem, marker_radius_px: f32) -> f32 {
    if item.is_marker() {
        return marker_radius_px;
    }
    match item.size {
        ClusterSize::Small => 15.0,
        ClusterSize::Medium => 19.0,
        ClusterSize::Large => 23.0,
    }
}

/// Oberstes Einzelmarker-Item unter einer Viewport-Position.
pub fn hovered_marker(scene: &MapScene, local_pos: [f32; 2]) -> Option<&SceneItem> {
    let pos = Vec2::from(local_pos);
    scene.items.iter().rev().find(|item| {
        item.is_marker()
            && Vec2::from(item.screen_pos).distance(pos)
                <= scene.options.marker_radius_px.max(scene.options.pick_radius_px)
    })
}

/// Oberstes Cluster-Item unter einer Viewport-Position.
pub fn hovered_cluster(scene: &MapScene, local_pos: [f32; 2]) -> Option<&SceneItem> {
    let pos = Vec2::from(local_pos);
    scene.items.iter().rev().find(|item| {
        !item.is_marker()
            && Vec2::from(item.screen_pos).distance(pos)
                <= item_radius(item, scene.options.marker_radius_px)
    })
}

/// Zeichnet die Szene in das übergebene Rechteck.
///
/// `hover_pos` ist die Mausposition (Bildschirm); über einem Cluster wird
/// dessen abgedeckte Fläche hinterlegt.
pub fn paint_map(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &MapScene,
    hover_pos: Option<egui::Pos2>,
) {
    painter.rect_filled(rect, 0.0, BACKGROUND);
    paint_graticule(painter, rect, scene);

    if let Some(cluster) = hover_pos
        .map(|pos| pos - rect.min)
        .and_then(|local| hovered_cluster(scene, [local.x, local.y]))
    {
        paint_coverage(painter, rect, scene, cluster);
    }

    for item in &scene.items {
        paint_item(painter, rect, scene, item);
    }

    if !scene.has_items() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Keine Marker sichtbar. File → Open CSV…",
            egui::FontId::proportional(18.0),
            GRID_LABEL,
        );
    }
}

/// Zeigt den Titel des Markers unter dem Mauszeiger als Tooltip.
pub fn show_hover_tooltip(response: &egui::Response, scene: &MapScene) {
    let Some(pointer) = response.hover_pos() else {
        return;
    };
    let local = pointer - response.rect.min;
    if let Some((_, title)) = hovered_marker(scene, [local.x, local.y]).and_then(|i| i.single.as_ref())
    {
        if !title.is_empty() {
            response.clone().on_hover_text_at_pointer(title.as_str());
        }
    }
}

fn paint_coverage(painter: &egui::Painter, rect: egui::Rect, scene: &MapScene, item: &SceneItem) {
    let color = to_color32(scene.options.category_color(item.category));
    let points: Vec<egui::Pos2> = item
        .coverage
        .iter()
        .map(|p| rect.min + egui::vec2(p[0], p[1]))
        .collect();
    let stroke = egui::Stroke::new(2.0, color.gamma_multiply(0.8));

    match points.as_slice() {
        [] | [_] => {}
        [a, b] => {
            painter.line_segment([*a, *b], stroke);
        }
        _ => {
            painter.add(egui::Shape::convex_polygon(
                points,
                color.gamma_multiply(0.2),
                stroke,
            ));
        }
    }
}

fn paint_item(painter: &egui::Painter, rect: egui::Rect, scene: &MapScene, item: &SceneItem) {
    let center = rect.min + egui::vec2(item.screen_pos[0], item.screen_pos[1]);
    let radius = item_radius(item, scene.options.marker_radius_px);
    if !rect.expand(radius).contains(center) {
        return;
    }
    let color = to_color32(scene.options.category_color(item.category));

    if let Some([x, y]) = item.anchor {
        painter.line_segment(
            [rect.min + egui::vec2(x, y), center],
            egui::Stroke::new(1.5, color.gamma_multiply(0.6)),
        );
    }

    if item.is_marker() {
        painter.circle(
            center,
            radius,
            color,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
        return;
    }

    painter.circle_filled(center, radius, color.gamma_multiply(0.35));
    painter.circle(
        center,
        radius * 0.75,
        color,
        egui::Stroke::new(1.5, egui::Color32::WHITE),
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        item.count.to_string(),
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
}

fn paint_graticule(painter: &egui::Painter, rect: egui::Rect, scene: &MapScene) {
    let size = Vec2::new(rect.width(), rect.height());
    let camera = &scene.camera;
    let top_left = camera.screen_to_world(Vec2::ZERO, size);
    let bottom_right = camera.screen_to_world(size, size);
    let (north, west) = geo::unproject(top_left);
    let (south, east) = geo::unproject(bottom_right);

    let step = graticule_step(camera.zoom);
    let stroke = egui::Stroke::new(1.0, GRID);
    let font = egui::FontId::proportional(10.0);

    let mut lng = (west / step).ceil() * step;
    while lng <= east {
        let x = rect.min.x + camera.world_to_screen(geo::project(north, lng), size).x;
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            stroke,
        );
        painter.text(
            egui::pos2(x + 2.0, rect.max.y - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{lng:.2}°"),
            font.clone(),
            GRID_LABEL,
        );
        lng += step;
    }

    let mut lat = (south / step).ceil() * step;
    while lat <= north {
        let y = rect.min.y + camera.world_to_screen(geo::project(lat, west), size).y;
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            stroke,
        );
        painter.text(
            egui::pos2(rect.min.x + 2.0, y - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{lat:.2}°"),
            font.clone(),
            GRID_LABEL,
        );
        lat += step;
    }
}
