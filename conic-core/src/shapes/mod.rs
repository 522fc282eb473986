pub mod bezier;
pub mod circle;
pub mod ellipse;
pub mod hyperbola;
pub mod line;
pub mod parabola;
pub mod rect;

pub use bezier::{CubicBezier, QuadraticBezier};
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use hyperbola::Hyperbola;
pub use line::{Line, LineSegment};
pub use parabola::{StandardParabola, VertexParabola};
pub use rect::Rect;
