use crate::error;
use crate::lang::token::Operator;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic. Results wrap like the machine's native integers;
/// division and modulus truncate toward zero.
pub struct Operation {}

impl Operation {
    pub fn apply(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        use Operator::*;
        match op {
            Plus => Ok(Operation::sum(lhs, rhs)),
            Minus => Ok(Operation::subtract(lhs, rhs)),
            Multiply => Ok(Operation::multiply(lhs, rhs)),
            Divide => Operation::divide(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
            Equal => Err(error!(SyntaxError)),
        }
    }

    pub fn sum(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_add(rhs)
    }

    pub fn subtract(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_sub(rhs)
    }

    pub fn multiply(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_mul(rhs)
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(ArithmeticError));
        }
        Ok(lhs.wrapping_div(rhs))
    }

    pub fn modulus(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(ArithmeticError));
        }
        Ok(lhs.wrapping_rem(rhs))
    }
}
