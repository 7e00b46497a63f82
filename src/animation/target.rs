use crate::foundation::core::Vec2;

/// Size information of a target that takes part in layout.
///
/// An `authored` component that is NaN means the size is unresolved (sized by layout), in
/// which case `measured` holds the size the target currently occupies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSize {
    /// Authored size; NaN on an axis sized by layout.
    pub authored: Vec2,
    /// Size measured by the last layout pass.
    pub measured: Vec2,
}

impl LayoutSize {
    /// Layout size from authored and measured sizes.
    pub fn new(authored: Vec2, measured: Vec2) -> Self {
        Self { authored, measured }
    }

    /// A size driven entirely by layout.
    pub fn unresolved(measured: Vec2) -> Self {
        Self {
            authored: Vec2::new(f64::NAN, f64::NAN),
            measured,
        }
    }
}

/// The object an animation builder animates.
pub trait AnimationTarget {
    /// `None` when the target has no layout size (size animations are then rejected).
    fn layout_size(&self) -> Option<LayoutSize>;
}

impl<T: AnimationTarget + ?Sized> AnimationTarget for &T {
    fn layout_size(&self) -> Option<LayoutSize> {
        (**self).layout_size()
    }
}

impl<T: AnimationTarget + ?Sized> AnimationTarget for std::rc::Rc<T> {
    fn layout_size(&self) -> Option<LayoutSize> {
        (**self).layout_size()
    }
}

impl<T: AnimationTarget + ?Sized> AnimationTarget for std::sync::Arc<T> {
    fn layout_size(&self) -> Option<LayoutSize> {
        (**self).layout_size()
    }
}

/// Plain-data target, used by scripts and tests.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaticTarget {
    /// Target name, for logs.
    #[serde(default)]
    pub name: String,
    /// Layout size; `None` for targets without layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TargetSize>,
}

/// Serializable form of [`LayoutSize`]; a missing `width`/`height` is unresolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetSize {
    /// Authored width; `None` when sized by layout.
    #[serde(default)]
    pub width: Option<f64>,
    /// Authored height; `None` when sized by layout.
    #[serde(default)]
    pub height: Option<f64>,
    /// Measured width.
    pub actual_width: f64,
    /// Measured height.
    pub actual_height: f64,
}

impl StaticTarget {
    /// A target without layout size.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    /// Give the target a layout size.
    pub fn with_size(mut self, size: TargetSize) -> Self {
        self.size = Some(size);
        self
    }
}

impl AnimationTarget for StaticTarget {
    fn layout_size(&self) -> Option<LayoutSize> {
        self.size.map(|s| {
            LayoutSize::new(
                Vec2::new(
                    s.width.unwrap_or(f64::NAN),
                    s.height.unwrap_or(f64::NAN),
                ),
                Vec2::new(s.actual_width, s.actual_height),
            )
        })
    }
}
