/// A parabola `y = a·x² + b·x + c` fitted through three points.
///
/// The fit goes through Newton's divided differences, and the vertex comes
/// from the Newton coefficients directly rather than from `-b / 2a`, so the
/// interpolation arithmetic is identical wherever the fit is reused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Parabola {
    /// Quadratic coefficient.
    pub(super) a: f64,
    /// Linear coefficient.
    pub(super) b: f64,
    /// Constant coefficient.
    pub(super) c: f64,
    /// Abscissa of the extremum.
    pub(super) vertex: f64,
}

impl Parabola {
    /// Fits the unique parabola through three points with pairwise distinct
    /// abscissas.
    ///
    /// A collinear or repeated triple produces non-finite coefficients; the
    /// caller is responsible for screening its points.
    pub(super) fn through(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> Self {
        let (x1, y1) = p1;
        let (x2, y2) = p2;
        let (x3, y3) = p3;

        let a0 = y1;
        let a1 = (y2 - a0) / (x2 - x1);
        let a2 = ((y3 - a0) / (x3 - x1) - a1) / (x3 - x2);

        Self {
            a: a2,
            b: a1 - a2 * x1 - a2 * x2,
            c: a0 - a1 * x1 + a2 * x1 * x2,
            vertex: (x1 + x2 - a1 / a2) / 2.0,
        }
    }

    /// Evaluates the parabola at `x`.
    pub(super) fn value_at(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn recovers_standard_coefficients() {
        // y = x² - 4x + 3 sampled at x = 0, 1, 4.
        let parabola = Parabola::through((0.0, 3.0), (1.0, 0.0), (4.0, 3.0));

        assert_relative_eq!(parabola.a, 1.0);
        assert_relative_eq!(parabola.b, -4.0);
        assert_relative_eq!(parabola.c, 3.0);
        assert_relative_eq!(parabola.vertex, 2.0);
    }

    #[test]
    fn vertex_is_order_independent() {
        let f = |x: f64| 2.5 * x * x - 3.0 * x + 0.5;
        let sample = |x: f64| (x, f(x));

        let forward = Parabola::through(sample(-1.0), sample(0.5), sample(2.0));
        let shuffled = Parabola::through(sample(2.0), sample(-1.0), sample(0.5));

        assert_relative_eq!(forward.vertex, 0.6, max_relative = 1e-12);
        assert_relative_eq!(shuffled.vertex, 0.6, max_relative = 1e-12);
    }

    #[test]
    fn evaluates_at_the_fitted_points() {
        let parabola = Parabola::through((1.0, 2.0), (2.0, 7.0), (3.0, 16.0));

        assert_relative_eq!(parabola.value_at(1.0), 2.0, max_relative = 1e-12);
        assert_relative_eq!(parabola.value_at(2.0), 7.0, max_relative = 1e-12);
        assert_relative_eq!(parabola.value_at(3.0), 16.0, max_relative = 1e-12);
    }
}
