//! Core linear-algebra traits for jacobi-dd.

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Vector norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
    /// Compute ‖x‖∞.
    fn norm_inf(&self, x: &V) -> Self::Scalar;
}

/// Element access A[i, j].
pub trait MatrixGet<T> {
    fn get(&self, i: usize, j: usize) -> T;
}

/// Row/column counts of a matrix.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}
