use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use gl::types::{GLsizei, GLsizeiptr, GLuint};

use crate::engine::mesh_data::{MESH_INDICES, MESH_VERTICES};

/// Vertex format storing position, normal, and uv texture coordinates.
///
/// Eight floats per vertex. The shader reads position and normal only; uv is
/// carried by the asset and kept so the stride matches it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3], // x, y, z
    pub normal: [f32; 3],   // nx, ny, nz (for lighting)
    pub uv: [f32; 2],       // texture coordinates u, v
}

/// Index buffer using 16-bit indices for compactness.
pub type Index = u16;

/// Attribute slots, matching the `layout(location = ..)` qualifiers in the vertex shader.
pub const POSITION_ATTRIB: GLuint = 0;
pub const NORMAL_ATTRIB: GLuint = 1;

/// Read-only mesh data: interleaved vertices plus a triangle list of indices.
///
/// Both slices are `'static`; the mesh is embedded in the binary and never
/// mutated, so nothing here owns or copies it.
#[derive(Clone, Copy, Debug)]
pub struct Geometry {
    pub vertices: &'static [Vertex],
    pub indices: &'static [Index],
}

impl Geometry {
    /// The mesh compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            vertices: &MESH_VERTICES,
            indices: &MESH_INDICES,
        }
    }

    /// Number of indices a single draw of the whole mesh covers.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// GPU-resident copy of a `Geometry` (VAO, VBO, IBO).
///
/// Created once by [`GLMesh::upload`]; dropping it deletes all three objects,
/// so the GL context must still be current at that point.
#[derive(Debug)]
pub struct GLMesh {
    pub vao: GLuint,
    pub vbo: GLuint,
    pub ibo: GLuint,
    pub index_count: usize,
}

impl GLMesh {
    /// One allocation and one `STATIC_DRAW` upload per buffer, then the
    /// position/normal attribute layout is recorded in the VAO.
    pub fn upload(geometry: &Geometry) -> Self {
        let vertex_bytes: &[u8] = bytemuck::cast_slice(geometry.vertices);
        let index_bytes: &[u8] = bytemuck::cast_slice(geometry.indices);
        let stride = size_of::<Vertex>() as GLsizei;

        let (mut vao, mut vbo, mut ibo) = (0, 0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::GenBuffers(1, &mut ibo);

            gl::BindVertexArray(vao);

            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                vertex_bytes.len() as GLsizeiptr,
                vertex_bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            // The element binding is VAO state; it stays attached after unbind.
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ibo);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                index_bytes.len() as GLsizeiptr,
                index_bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(
                POSITION_ATTRIB,
                3,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Vertex, position) as *const _,
            );
            gl::EnableVertexAttribArray(POSITION_ATTRIB);

            gl::VertexAttribPointer(
                NORMAL_ATTRIB,
                3,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Vertex, normal) as *const _,
            );
            gl::EnableVertexAttribArray(NORMAL_ATTRIB);

            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        log::info!(
            "mesh uploaded: {} vertices, {} triangles ({} + {} bytes)",
            geometry.vertices.len(),
            geometry.triangle_count(),
            vertex_bytes.len(),
            index_bytes.len(),
        );

        Self {
            vao,
            vbo,
            ibo,
            index_count: geometry.index_count(),
        }
    }

    /// Draws every index as a triangle list.
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.ibo);
            gl::DrawElements(
                gl::TRIANGLES,
                self.index_count as GLsizei,
                gl::UNSIGNED_SHORT,
                std::ptr::null(),
            );
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for GLMesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteBuffers(1, &self.ibo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
        log::debug!("mesh buffers released (vao {}, vbo {}, ibo {})", self.vao, self.vbo, self.ibo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_eight_packed_floats() {
        assert_eq!(size_of::<Vertex>(), 8 * size_of::<f32>());
        assert_eq!(offset_of!(Vertex, position), 0);
        assert_eq!(offset_of!(Vertex, normal), 3 * size_of::<f32>());
        assert_eq!(offset_of!(Vertex, uv), 6 * size_of::<f32>());
    }

    #[test]
    fn builtin_mesh_is_a_valid_triangle_list() {
        let geometry = Geometry::builtin();
        assert!(!geometry.vertices.is_empty());
        assert!(geometry.index_count() > 0);
        assert_eq!(geometry.index_count() % 3, 0);
        assert_eq!(geometry.triangle_count() * 3, geometry.index_count());
        assert!(geometry.vertices.len() <= Index::MAX as usize + 1);

        let n = geometry.vertices.len();
        assert!(geometry.indices.iter().all(|&i| (i as usize) < n));
    }

    #[test]
    fn index_count_follows_the_asset() {
        let geometry = Geometry::builtin();
        assert_eq!(geometry.index_count(), MESH_INDICES.len());
        assert_eq!(geometry.vertices.len(), MESH_VERTICES.len());
    }

    #[test]
    fn builtin_normals_are_unit_length() {
        for v in Geometry::builtin().vertices {
            let [x, y, z] = v.normal;
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < 1e-3, "normal {:?} has length {len}", v.normal);
        }
    }

    #[test]
    fn byte_views_cover_whole_asset() {
        let geometry = Geometry::builtin();
        let vertex_bytes: &[u8] = bytemuck::cast_slice(geometry.vertices);
        let index_bytes: &[u8] = bytemuck::cast_slice(geometry.indices);
        assert_eq!(vertex_bytes.len(), geometry.vertices.len() * 32);
        assert_eq!(index_bytes.len(), geometry.index_count() * 2);
    }
}
