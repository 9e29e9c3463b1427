//! Geometric description of the armor for a given selection.
//!
//! Each section contributes a few primitives at a fixed anchor. Nothing here
//! knows about GPUs or materials beyond a coarse [`Finish`] tag; renderers
//! turn pieces into whatever they draw (the web frontend strokes wireframes).

use crate::suit::{Section, SuitSelection};
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::PI;

pub type Segment = [Vec3; 2];

const RING_STEPS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Sphere { radius: f32 },
    Cuboid { size: Vec3 },
    Octahedron { radius: f32 },
    /// Capsule along Y; `length` excludes the end caps.
    Capsule { radius: f32, length: f32 },
    Cylinder { top: f32, bottom: f32, height: f32 },
    Cone { radius: f32, height: f32 },
}

/// Surface treatment the renderer should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finish {
    /// Tinted with the armor color.
    Plate,
    Visor,
    /// Emissive power core.
    Core,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmorPiece {
    pub section: Section,
    pub primitive: Primitive,
    pub finish: Finish,
    /// Position relative to the armor root.
    pub position: Vec3,
    pub rotation: Quat,
}

impl ArmorPiece {
    fn at(section: Section, primitive: Primitive, position: Vec3) -> Self {
        Self {
            section,
            primitive,
            finish: Finish::Plate,
            position,
            rotation: Quat::IDENTITY,
        }
    }

    fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
        self
    }

    fn finish(mut self, finish: Finish) -> Self {
        self.finish = finish;
        self
    }

    fn mirrored_x(self) -> [Self; 2] {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        let mut right = self;
        right.position.x = -self.position.x;
        right.rotation = Quat::from_euler(EulerRot::XYZ, x, -y, -z);
        [self, right]
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// World-space wireframe with the whole armor spun by `yaw` about +Y.
    pub fn segments(&self, yaw: f32) -> Vec<Segment> {
        let m = Mat4::from_rotation_y(yaw) * self.transform();
        self.primitive
            .local_segments()
            .into_iter()
            .map(|[a, b]| [m.transform_point3(a), m.transform_point3(b)])
            .collect()
    }
}

impl Primitive {
    /// Wireframe edges in the primitive's local frame, centered at the origin.
    pub fn local_segments(&self) -> Vec<Segment> {
        let mut out = Vec::new();
        match *self {
            Primitive::Sphere { radius } => {
                ring(&mut out, Vec3::ZERO, radius, Plane::Xz);
                ring(&mut out, Vec3::ZERO, radius, Plane::Xy);
                ring(&mut out, Vec3::ZERO, radius, Plane::Zy);
            }
            Primitive::Cuboid { size } => {
                let h = size * 0.5;
                let corners: [Vec3; 8] = std::array::from_fn(|i| {
                    Vec3::new(
                        if i & 1 == 0 { -h.x } else { h.x },
                        if i & 2 == 0 { -h.y } else { h.y },
                        if i & 4 == 0 { -h.z } else { h.z },
                    )
                });
                for i in 0..8usize {
                    for bit in [1usize, 2, 4] {
                        if i & bit == 0 {
                            out.push([corners[i], corners[i | bit]]);
                        }
                    }
                }
            }
            Primitive::Octahedron { radius } => {
                let tips = [Vec3::Y * radius, Vec3::NEG_Y * radius];
                let waist = [
                    Vec3::X * radius,
                    Vec3::Z * radius,
                    Vec3::NEG_X * radius,
                    Vec3::NEG_Z * radius,
                ];
                for i in 0..4 {
                    out.push([waist[i], waist[(i + 1) % 4]]);
                    for tip in tips {
                        out.push([tip, waist[i]]);
                    }
                }
            }
            Primitive::Capsule { radius, length } => {
                let top = Vec3::Y * (length * 0.5);
                ring(&mut out, top, radius, Plane::Xz);
                ring(&mut out, -top, radius, Plane::Xz);
                spokes(&mut out, radius, radius, length);
                arc(&mut out, top, radius, Plane::Xy, 0.0, PI);
                arc(&mut out, top, radius, Plane::Zy, 0.0, PI);
                arc(&mut out, -top, radius, Plane::Xy, PI, 2.0 * PI);
                arc(&mut out, -top, radius, Plane::Zy, PI, 2.0 * PI);
            }
            Primitive::Cylinder {
                top,
                bottom,
                height,
            } => {
                let up = Vec3::Y * (height * 0.5);
                ring(&mut out, up, top, Plane::Xz);
                ring(&mut out, -up, bottom, Plane::Xz);
                spokes(&mut out, top, bottom, height);
            }
            Primitive::Cone { radius, height } => {
                let base = Vec3::NEG_Y * (height * 0.5);
                let apex = Vec3::Y * (height * 0.5);
                ring(&mut out, base, radius, Plane::Xz);
                for i in 0..4 {
                    let a = i as f32 * PI * 0.5;
                    out.push([base + Vec3::new(a.cos(), 0.0, a.sin()) * radius, apex]);
                }
            }
        }
        out
    }
}

#[derive(Clone, Copy)]
enum Plane {
    Xz,
    Xy,
    Zy,
}

fn plane_point(plane: Plane, angle: f32, radius: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    match plane {
        Plane::Xz => Vec3::new(c, 0.0, s) * radius,
        Plane::Xy => Vec3::new(c, s, 0.0) * radius,
        Plane::Zy => Vec3::new(0.0, s, c) * radius,
    }
}

fn arc(out: &mut Vec<Segment>, center: Vec3, radius: f32, plane: Plane, from: f32, to: f32) {
    let steps = RING_STEPS / 2;
    for i in 0..steps {
        let a0 = from + (to - from) * i as f32 / steps as f32;
        let a1 = from + (to - from) * (i + 1) as f32 / steps as f32;
        out.push([
            center + plane_point(plane, a0, radius),
            center + plane_point(plane, a1, radius),
        ]);
    }
}

fn ring(out: &mut Vec<Segment>, center: Vec3, radius: f32, plane: Plane) {
    for i in 0..RING_STEPS {
        let a0 = 2.0 * PI * i as f32 / RING_STEPS as f32;
        let a1 = 2.0 * PI * (i + 1) as f32 / RING_STEPS as f32;
        out.push([
            center + plane_point(plane, a0, radius),
            center + plane_point(plane, a1, radius),
        ]);
    }
}

fn spokes(out: &mut Vec<Segment>, top: f32, bottom: f32, height: f32) {
    let up = Vec3::Y * (height * 0.5);
    for i in 0..4 {
        let a = i as f32 * PI * 0.5;
        let d = Vec3::new(a.cos(), 0.0, a.sin());
        out.push([up + d * top, -up + d * bottom]);
    }
}

/// Anchor of each section relative to the armor root.
pub fn section_anchor(section: Section) -> Vec3 {
    match section {
        Section::Helmet => Vec3::new(0.0, 2.35, 0.0),
        Section::Chest => Vec3::new(0.0, 1.35, 0.0),
        Section::Arms => Vec3::new(0.0, 0.95, 0.0),
        Section::Legs => Vec3::new(0.0, -0.15, 0.0),
    }
}

fn section_pieces(section: Section, variant: usize) -> Vec<ArmorPiece> {
    use Primitive::*;
    let p = |prim, x, y, z| ArmorPiece::at(section, prim, Vec3::new(x, y, z));
    let mut pieces = Vec::new();
    match section {
        Section::Helmet => {
            match variant {
                0 => {
                    pieces.push(p(Sphere { radius: 0.43 }, 0.0, 0.0, 0.0));
                    pieces.push(
                        p(
                            Cylinder {
                                top: 0.18,
                                bottom: 0.28,
                                height: 0.24,
                            },
                            0.0,
                            -0.34,
                            0.22,
                        )
                        .rotated(PI / 2.0, 0.0, 0.0),
                    );
                }
                1 => {
                    pieces.push(p(
                        Cuboid {
                            size: Vec3::new(0.72, 0.62, 0.6),
                        },
                        0.0,
                        0.0,
                        0.0,
                    ));
                    pieces.push(
                        p(
                            Cylinder {
                                top: 0.32,
                                bottom: 0.32,
                                height: 0.5,
                            },
                            0.0,
                            0.1,
                            -0.06,
                        )
                        .rotated(PI / 2.0, 0.0, 0.0),
                    );
                }
                _ => {
                    pieces.push(p(Octahedron { radius: 0.47 }, 0.0, 0.02, 0.0));
                    pieces.push(
                        p(
                            Cone {
                                radius: 0.28,
                                height: 0.52,
                            },
                            0.0,
                            0.22,
                            0.22,
                        )
                        .rotated(PI * 0.3, 0.0, 0.0),
                    );
                }
            }
            pieces.push(
                p(
                    Cuboid {
                        size: Vec3::new(0.5, 0.2, 0.03),
                    },
                    0.0,
                    -0.05,
                    0.29,
                )
                .finish(Finish::Visor),
            );
        }
        Section::Chest => {
            let base = match variant {
                0 => Cuboid {
                    size: Vec3::new(1.05, 1.12, 0.58),
                },
                1 => Capsule {
                    radius: 0.45,
                    length: 0.5,
                },
                _ => Sphere { radius: 0.6 },
            };
            pieces.push(p(base, 0.0, 0.0, 0.0));
            pieces.push(
                p(
                    Cylinder {
                        top: 0.13,
                        bottom: 0.13,
                        height: 0.14,
                    },
                    0.0,
                    0.06,
                    0.31,
                )
                .rotated(PI / 2.0, 0.0, 0.0)
                .finish(Finish::Core),
            );
            pieces.push(p(
                Cuboid {
                    size: Vec3::new(0.82, 0.2, 0.12),
                },
                0.0,
                0.42,
                0.18,
            ));
            pieces.push(p(
                Cuboid {
                    size: Vec3::new(0.62, 0.17, 0.1),
                },
                0.0,
                -0.42,
                0.16,
            ));
        }
        Section::Arms => {
            let shape = match variant {
                0 => Cylinder {
                    top: 0.14,
                    bottom: 0.2,
                    height: 0.62,
                },
                1 => Cuboid {
                    size: Vec3::new(0.24, 0.65, 0.26),
                },
                _ => Capsule {
                    radius: 0.14,
                    length: 0.35,
                },
            };
            pieces.extend(p(shape, -0.86, 0.0, 0.0).rotated(0.0, 0.0, PI * 0.08).mirrored_x());
        }
        Section::Legs => {
            let thigh = match variant {
                0 => Capsule {
                    radius: 0.21,
                    length: 0.58,
                },
                1 => Cuboid {
                    size: Vec3::new(0.34, 0.8, 0.36),
                },
                _ => Cylinder {
                    top: 0.18,
                    bottom: 0.24,
                    height: 0.82,
                },
            };
            pieces.extend(p(thigh, -0.33, 0.0, 0.0).mirrored_x());
        }
    }
    let anchor = section_anchor(section);
    for piece in &mut pieces {
        piece.position += anchor;
    }
    pieces
}

/// All pieces for the current build, in section order.
pub fn build_armor(selection: &SuitSelection) -> Vec<ArmorPiece> {
    selection
        .iter()
        .flat_map(|(section, variant)| section_pieces(section, variant.index()))
        .collect()
}
