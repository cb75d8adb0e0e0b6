// Primitive arithmetic operations
pub mod add;
pub mod mul;
pub mod pow;

// Derived operations (no backward rule of their own)
pub mod neg;
pub mod sub;

pub use add::{add_op, sum_op};
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;
