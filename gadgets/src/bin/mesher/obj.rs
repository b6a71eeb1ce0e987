use std::io::{self, Write};

use isosurface::mesh::Mesh;

/// Writes `mesh` as Wavefront OBJ: one `v` and `vn` record per vertex, and one `f` record per triangle referencing both
/// by their 1-based index.
pub fn write_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> io::Result<()> {
  writeln!(writer, "# {} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count())?;
  for vertex in mesh.vertices() {
    let p = vertex.position;
    writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
  }
  for vertex in mesh.vertices() {
    let n = vertex.normal;
    writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
  }
  for [a, b, c] in mesh.triangles() {
    let (a, b, c) = (a + 1, b + 1, c + 1);
    writeln!(writer, "f {}//{} {}//{} {}//{}", a, a, b, b, c, c)?;
  }
  Ok(())
}
