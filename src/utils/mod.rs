//! Various unsorted geometrical operators.

pub use self::interval::Interval;
pub use self::matrix_ops::{
    extract_scale, extract_scale_matrix, extract_translation, extract_translation_matrix,
    linear_part, max_scale, rotation_from_towards, uniform_scale_squared,
};
pub use self::point_ops::{
    clamp_point, component_max, component_min, is_in_range, is_point_in_range, projection,
    projection_length,
};

mod interval;
mod matrix_ops;
mod point_ops;
