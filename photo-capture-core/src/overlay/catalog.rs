use serde::{Deserialize, Serialize};

/// Translucent color wash rendered over the live preview or a stored
/// thumbnail. Cosmetic only — never applied to pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayTint {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

/// A selectable overlay and its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Stable key, unique within the catalog.
    pub id: String,
    pub label: String,
    pub icon: String,
    /// Gradient color pair used by chrome around the preview, as hex strings.
    pub gradient: [String; 2],
    /// `None` renders no wash (the passthrough overlay).
    pub tint: Option<OverlayTint>,
}

/// The fixed, ordered set of overlays the UI can offer.
///
/// Defined once at startup; entries are never created or destroyed at
/// runtime. The first entry is the passthrough overlay and doubles as the
/// fallback when a lookup misses.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayCatalog {
    overlays: Vec<Overlay>,
}

impl OverlayCatalog {
    /// The built-in catalog: passthrough, warm, cool, vintage.
    pub fn builtin() -> Self {
        fn overlay(
            id: &str,
            label: &str,
            icon: &str,
            gradient: [&str; 2],
            tint: Option<OverlayTint>,
        ) -> Overlay {
            Overlay {
                id: id.to_string(),
                label: label.to_string(),
                icon: icon.to_string(),
                gradient: gradient.map(str::to_string),
                tint,
            }
        }

        Self {
            overlays: vec![
                overlay("none", "Photos", "📸", ["#667eea", "#764ba2"], None),
                overlay(
                    "warm",
                    "Warm",
                    "☀️",
                    ["#f093fb", "#f5576c"],
                    Some(OverlayTint {
                        red: 255,
                        green: 165,
                        blue: 0,
                        alpha: 0.15,
                    }),
                ),
                overlay(
                    "cool",
                    "Cool",
                    "🌊",
                    ["#4facfe", "#00f2fe"],
                    Some(OverlayTint {
                        red: 0,
                        green: 191,
                        blue: 255,
                        alpha: 0.15,
                    }),
                ),
                overlay(
                    "vintage",
                    "Vintage",
                    "🎞️",
                    ["#ffecd2", "#fcb69f"],
                    Some(OverlayTint {
                        red: 139,
                        green: 69,
                        blue: 19,
                        alpha: 0.2,
                    }),
                ),
            ],
        }
    }

    /// Find an overlay by key. A miss is non-fatal; rendering callers fall
    /// back to [`OverlayCatalog::default_overlay`].
    pub fn lookup(&self, id: &str) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// The passthrough overlay, used as the rendering fallback.
    pub fn default_overlay(&self) -> &Overlay {
        &self.overlays[0]
    }

    /// All overlays in display order.
    pub fn all(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

impl Default for OverlayCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_four_ordered_entries() {
        let catalog = OverlayCatalog::builtin();
        let ids: Vec<&str> = catalog.all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["none", "warm", "cool", "vintage"]);
    }

    #[test]
    fn ids_are_unique() {
        let catalog = OverlayCatalog::builtin();
        for (i, a) in catalog.all().iter().enumerate() {
            for b in catalog.all().iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let catalog = OverlayCatalog::builtin();
        assert_eq!(catalog.lookup("warm").unwrap().label, "Warm");
        assert!(catalog.lookup("sepia").is_none());
        assert!(catalog.contains("cool"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn lookup_is_stable_across_calls() {
        let catalog = OverlayCatalog::builtin();
        assert_eq!(catalog.lookup("vintage"), catalog.lookup("vintage"));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn default_overlay_is_passthrough() {
        let catalog = OverlayCatalog::builtin();
        let fallback = catalog.default_overlay();
        assert_eq!(fallback.id, "none");
        assert!(fallback.tint.is_none());
    }

    #[test]
    fn tinted_overlays_carry_a_wash() {
        let catalog = OverlayCatalog::builtin();
        let warm = catalog.lookup("warm").unwrap();
        let tint = warm.tint.unwrap();
        assert_eq!((tint.red, tint.green, tint.blue), (255, 165, 0));
        assert!(tint.alpha > 0.0 && tint.alpha < 1.0);
    }
}
