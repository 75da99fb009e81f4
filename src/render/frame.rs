//! Frame building: simulation state to an ordered command list
//!
//! Occlusion order is fixed: background, stars, nebulas, particles,
//! planets, enemies, ship, joystick overlay, HUD text.

use glam::Vec2;

use super::{Color, DrawCmd, Fill, format_coins};
use crate::angle_to_vector;
use crate::sim::{Enemy, GameEngine, Particle, Planet, SpaceShip, Star, VirtualJoystick};

/// Build the full frame for one tick
pub fn build_frame(engine: &GameEngine) -> Vec<DrawCmd> {
    let screen = engine.config().screen();
    let mut frame = Vec::new();

    push_background(&mut frame, screen);
    for star in &engine.stars {
        push_star(&mut frame, star);
    }
    push_nebulas(&mut frame, screen);
    for particle in engine.particles.iter() {
        push_particle(&mut frame, particle);
    }
    for planet in &engine.planets {
        push_planet(&mut frame, planet);
    }
    for enemy in &engine.enemies {
        push_enemy(&mut frame, enemy);
    }
    push_ship(&mut frame, &engine.ship);
    push_joystick(&mut frame, &engine.joystick);
    push_hud(&mut frame, engine, screen);

    frame
}

fn push_background(frame: &mut Vec<DrawCmd>, screen: Vec2) {
    frame.push(DrawCmd::RoundedRect {
        min: Vec2::ZERO,
        max: screen,
        corner: 0.0,
        color: Color::rgb(0, 0, 10),
    });
    frame.push(DrawCmd::Circle {
        center: screen / 2.0,
        radius: screen.y,
        fill: Fill::Radial {
            center: Color::rgb(5, 5, 25),
            edge: Color::rgb(0, 0, 10),
        },
    });
}

fn push_star(frame: &mut Vec<DrawCmd>, star: &Star) {
    let alpha = (255.0 * star.brightness) as u8;
    frame.push(DrawCmd::Circle {
        center: star.pos,
        radius: star.size,
        fill: Fill::Solid(Color::WHITE.with_alpha(alpha)),
    });
    frame.push(DrawCmd::Circle {
        center: star.pos,
        radius: star.size * 2.0,
        fill: Fill::Solid(Color::WHITE.with_alpha(alpha / 2)),
    });
}

fn push_nebulas(frame: &mut Vec<DrawCmd>, screen: Vec2) {
    let nebulas = [
        (0.3, 0.2, 300.0, Color::rgba(50, 100, 255, 30)),
        (0.7, 0.6, 250.0, Color::rgba(150, 50, 200, 25)),
        (0.5, 0.8, 200.0, Color::rgba(255, 50, 50, 20)),
    ];
    for (fx, fy, radius, color) in nebulas {
        frame.push(DrawCmd::Circle {
            center: Vec2::new(screen.x * fx, screen.y * fy),
            radius,
            fill: Fill::Solid(color),
        });
    }
}

fn push_particle(frame: &mut Vec<DrawCmd>, particle: &Particle) {
    let ratio = particle.life_ratio();
    let alpha = (255.0 * ratio) as u8;
    frame.push(DrawCmd::Circle {
        center: particle.pos,
        radius: particle.size * ratio,
        fill: Fill::Solid(particle.color.with_alpha(alpha)),
    });
    frame.push(DrawCmd::Circle {
        center: particle.pos,
        radius: particle.size * ratio * 2.0,
        fill: Fill::Solid(Color::WHITE.with_alpha(alpha / 2)),
    });
}

fn push_planet(frame: &mut Vec<DrawCmd>, planet: &Planet) {
    let radius = planet.radius();
    let ratio = planet.health_ratio();
    let body = Color::rgb(
        (255.0 * (1.0 - ratio)) as u8,
        (255.0 * ratio) as u8,
        (150.0 * ratio) as u8,
    );
    frame.push(DrawCmd::Circle {
        center: planet.pos,
        radius,
        fill: Fill::Radial {
            center: body,
            edge: Color::rgb(body.r / 2, body.g / 2, body.b / 2),
        },
    });

    // Continents ride the spin accumulator
    for i in 0..4 {
        let angle = planet.rotation + i as f32 * 90.0;
        frame.push(DrawCmd::Circle {
            center: planet.pos + angle_to_vector(angle) * radius * 0.6,
            radius: radius * 0.3,
            fill: Fill::Solid(Color::rgba(50, 50, 50, 200)),
        });
    }
    if ratio > 0.3 {
        for i in 0..3 {
            let angle = planet.rotation * 2.0 + i as f32 * 120.0;
            frame.push(DrawCmd::Circle {
                center: planet.pos + angle_to_vector(angle) * radius * 0.4,
                radius: radius * 0.2,
                fill: Fill::Solid(Color::rgba(255, 255, 255, 120)),
            });
        }
    }

    frame.push(DrawCmd::Circle {
        center: planet.pos,
        radius: radius + 15.0,
        fill: Fill::Radial {
            center: Color::rgba(100, 200, 255, 80),
            edge: Color::rgba(100, 200, 255, 0),
        },
    });
    frame.push(DrawCmd::Text {
        pos: planet.pos + Vec2::new(0.0, 10.0),
        size: 28.0,
        color: Color::WHITE,
        text: planet.health().to_string(),
    });
}

fn push_enemy(frame: &mut Vec<DrawCmd>, enemy: &Enemy) {
    let radius = enemy.radius();
    let pulse = enemy.pulse();
    frame.push(DrawCmd::Circle {
        center: enemy.pos,
        radius: radius * pulse,
        fill: Fill::Radial {
            center: Color::rgb(255, 50, 50),
            edge: Color::rgb(150, 0, 0),
        },
    });
    frame.push(DrawCmd::Circle {
        center: enemy.pos,
        radius: radius * 0.6 * pulse,
        fill: Fill::Solid(Color::rgb(255, 200, 200)),
    });

    for i in 0..8 {
        let angle = enemy.rotation + i as f32 * 45.0;
        frame.push(DrawCmd::Circle {
            center: enemy.pos + angle_to_vector(angle) * radius * 1.3,
            radius: 8.0,
            fill: Fill::Solid(Color::rgb(200, 0, 0)),
        });
    }

    for side in [-1.0, 1.0] {
        let eye = enemy.pos + Vec2::new(side * radius * 0.3, -radius * 0.2);
        frame.push(DrawCmd::Circle {
            center: eye,
            radius: 6.0,
            fill: Fill::Solid(Color::rgb(0, 255, 0)),
        });
        frame.push(DrawCmd::Circle {
            center: eye,
            radius: 3.0,
            fill: Fill::Solid(Color::rgb(0, 0, 0)),
        });
    }

    frame.push(DrawCmd::Circle {
        center: enemy.pos,
        radius: radius + 25.0,
        fill: Fill::Radial {
            center: Color::rgba(255, 0, 0, 60),
            edge: Color::rgba(255, 0, 0, 0),
        },
    });
}

fn push_ship(frame: &mut Vec<DrawCmd>, ship: &SpaceShip) {
    let pos = ship.pos;

    frame.push(DrawCmd::Circle {
        center: pos,
        radius: ship.radius(),
        fill: Fill::Radial {
            center: Color::rgb(0, 200, 255),
            edge: Color::rgb(0, 100, 200),
        },
    });
    frame.push(DrawCmd::Circle {
        center: pos,
        radius: 20.0,
        fill: Fill::Solid(Color::rgba(200, 230, 255, 180)),
    });
    frame.push(DrawCmd::Circle {
        center: pos,
        radius: 15.0,
        fill: Fill::Solid(Color::rgb(150, 200, 255)),
    });

    // Wings
    for side in [-1.0f32, 1.0] {
        let (inner, outer) = (30.0 * side, 45.0 * side);
        frame.push(DrawCmd::RoundedRect {
            min: pos + Vec2::new(inner.min(outer), -12.0),
            max: pos + Vec2::new(inner.max(outer), 12.0),
            corner: 10.0,
            color: Color::rgb(0, 150, 220),
        });
        let (inner, outer) = (33.0 * side, 42.0 * side);
        frame.push(DrawCmd::RoundedRect {
            min: pos + Vec2::new(inner.min(outer), -8.0),
            max: pos + Vec2::new(inner.max(outer), 8.0),
            corner: 5.0,
            color: Color::rgb(0, 180, 255),
        });
    }

    // Engine pods flare with the glow state
    let glow = ship.engine_glow;
    for side in [-1.0f32, 1.0] {
        frame.push(DrawCmd::Circle {
            center: pos + Vec2::new(side * 38.0, 0.0),
            radius: 8.0 + glow * 5.0,
            fill: Fill::Radial {
                center: Color::rgb(255, (200.0 + glow * 55.0) as u8, 0),
                edge: Color::rgba(255, 100, 0, 100),
            },
        });
    }

    frame.push(DrawCmd::Circle {
        center: pos,
        radius: 50.0,
        fill: Fill::Radial {
            center: Color::rgba(0, 150, 255, 50),
            edge: Color::rgba(0, 100, 200, 0),
        },
    });
}

fn push_joystick(frame: &mut Vec<DrawCmd>, joystick: &VirtualJoystick) {
    frame.push(DrawCmd::Circle {
        center: joystick.center(),
        radius: joystick.base_radius(),
        fill: Fill::Solid(Color::rgba(80, 80, 80, 180)),
    });
    frame.push(DrawCmd::Circle {
        center: joystick.handle(),
        radius: joystick.handle_radius(),
        fill: Fill::Solid(Color::rgba(200, 200, 200, 220)),
    });
    frame.push(DrawCmd::Circle {
        center: joystick.handle(),
        radius: joystick.handle_radius() * 0.5,
        fill: Fill::Solid(Color::rgb(100, 100, 100)),
    });
}

fn push_hud(frame: &mut Vec<DrawCmd>, engine: &GameEngine, screen: Vec2) {
    let state = &engine.state;
    let labels = [
        (
            Vec2::new(30.0, 50.0),
            format!("LEVEL: {}", state.current_level()),
        ),
        (
            Vec2::new(30.0, 100.0),
            format!(
                "PLANETS: {}/{}",
                engine.planets.len(),
                engine.config().planets_per_level
            ),
        ),
        (
            Vec2::new(screen.x - 300.0, 50.0),
            format!("SCORE: {}", state.score()),
        ),
        (
            Vec2::new(screen.x - 300.0, 100.0),
            format!("COINS: {}", format_coins(state.coins())),
        ),
    ];
    for (pos, text) in labels {
        frame.push(DrawCmd::Text {
            pos,
            size: 36.0,
            color: Color::WHITE,
            text,
        });
    }
}
