//! Hand-off of triangulated buffers to a renderer

use super::MeshData;

/// Consumer of triangulated meshes
///
/// A sink replaces whatever geometry it displays with the submitted mesh.
/// Engine integrations implement this to upload the buffers.
pub trait MeshSink {
    fn submit_mesh(&mut self, mesh: &MeshData);
}

/// Keeps a copy of the last submitted mesh
impl MeshSink for MeshData {
    fn submit_mesh(&mut self, mesh: &MeshData) {
        self.clone_from(mesh);
    }
}

impl<S: MeshSink + ?Sized> MeshSink for &mut S {
    fn submit_mesh(&mut self, mesh: &MeshData) {
        (**self).submit_mesh(mesh);
    }
}

impl<S: MeshSink + ?Sized> MeshSink for Box<S> {
    fn submit_mesh(&mut self, mesh: &MeshData) {
        (**self).submit_mesh(mesh);
    }
}
