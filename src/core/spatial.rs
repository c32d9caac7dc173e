//! Spatial-Index (KD-Tree) für Gelenk-Abfragen im 3D-Raum.

use glam::Vec3;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Abfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointMatch {
    /// Kettenindex des gefundenen Gelenks
    pub index: usize,
    /// Euklidische Distanz zum Suchpunkt bzw. zum Pick-Strahl
    pub distance: f32,
}

/// Read-only Spatial-Index über alle Gelenkpositionen einer Kette.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 3>,
    positions: Vec<Vec3>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 3]>::new()).into(),
            positions: Vec::new(),
        }
    }

    /// Baut einen Index aus Positionen in Kettenreihenfolge.
    pub fn from_positions(positions: &[Vec3]) -> Self {
        let entries: Vec<[f64; 3]> = positions
            .iter()
            .map(|p| [p.x as f64, p.y as f64, p.z as f64])
            .collect();

        Self {
            tree: (&entries).into(),
            positions: positions.to_vec(),
        }
    }

    /// Gibt die Anzahl indexierter Gelenke zurück.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn keine Gelenke im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Findet das nächste Gelenk zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec3) -> Option<JointMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64, query.z as f64]);

        Some(JointMatch {
            index: result.item as usize,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Gelenke innerhalb eines Radius, sortiert nach Distanz.
    pub fn within_radius(&self, query: Vec3, radius: f32) -> Vec<JointMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(
                &[query.x as f64, query.y as f64, query.z as f64],
                (radius * radius) as f64,
            )
            .into_iter()
            .map(|entry| JointMatch {
                index: entry.item as usize,
                distance: (entry.distance as f32).sqrt(),
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Findet das vorderste Gelenk entlang eines Pick-Strahls.
    ///
    /// Kandidaten sind alle Gelenke vor dem Strahlursprung, deren Lotabstand
    /// zum Strahl höchstens `radius` beträgt. Gewinner ist der Kandidat mit der
    /// geringsten Strahltiefe, bei Gleichstand der mit dem kleineren Abstand.
    pub fn pick_along_ray(&self, origin: Vec3, direction: Vec3, radius: f32) -> Option<JointMatch> {
        let direction = direction.try_normalize()?;
        if radius.is_sign_negative() {
            return None;
        }

        let mut best: Option<(f32, JointMatch)> = None;
        for (index, position) in self.positions.iter().enumerate() {
            let depth = (*position - origin).dot(direction);
            if depth < 0.0 {
                continue;
            }
            let distance = position.distance(origin + direction * depth);
            if distance > radius {
                continue;
            }

            let candidate = JointMatch { index, distance };
            let better = match best {
                None => true,
                Some((best_depth, best_match)) => {
                    depth < best_depth - f32::EPSILON
                        || ((depth - best_depth).abs() <= f32::EPSILON
                            && distance < best_match.distance)
                }
            };
            if better {
                best = Some((depth, candidate));
            }
        }

        best.map(|(_, hit)| hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_positions() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(4.0, 3.0, 1.0),
        ]
    }

    #[test]
    fn nearest_returns_expected_joint() {
        let index = SpatialIndex::from_positions(&sample_positions());
        let nearest = index
            .nearest(Vec3::new(3.9, 2.9, 1.0))
            .expect("Treffer erwartet");

        assert_eq!(nearest.index, 2);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let index = SpatialIndex::from_positions(&sample_positions());
        let matches = index.within_radius(Vec3::ZERO, 6.0);

        let ids: Vec<usize> = matches.into_iter().map(|m| m.index).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn ray_pick_prefers_front_most_joint() {
        let positions = vec![Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 2.0)];
        let index = SpatialIndex::from_positions(&positions);

        let hit = index
            .pick_along_ray(Vec3::ZERO, Vec3::Z, 0.5)
            .expect("Treffer erwartet");
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn ray_pick_ignores_joints_behind_origin_or_outside_radius() {
        let positions = vec![Vec3::new(0.0, 0.0, -3.0), Vec3::new(2.0, 0.0, 3.0)];
        let index = SpatialIndex::from_positions(&positions);

        assert!(index.pick_along_ray(Vec3::ZERO, Vec3::Z, 0.5).is_none());
        assert!(index.pick_along_ray(Vec3::ZERO, Vec3::ZERO, 0.5).is_none());
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec3::ZERO).is_none());
        assert!(index.pick_along_ray(Vec3::ZERO, Vec3::Z, 1.0).is_none());
    }
}
