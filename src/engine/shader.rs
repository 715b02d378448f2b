use std::collections::HashMap;
use std::ffi::CString;
use std::fmt;

use gl::types::{GLchar, GLenum, GLint, GLuint};

/// Uniforms every frame writes. Their locations are resolved right after link.
pub const FRAME_UNIFORMS: [&str; 3] = ["model", "projection", "view"];

pub const VERTEX_SHADER_SRC: &str = r#"#version 330 core
layout(location = 0) in vec3 position;
layout(location = 1) in vec3 normal;
out vec3 v_Normal;
uniform mat4 model;
uniform mat4 projection;
uniform mat4 view;

void main() {
    gl_Position = projection * view * model * vec4(position, 1.0);
    v_Normal = normal;
}
"#;

pub const FRAGMENT_SHADER_SRC: &str = r#"#version 330 core
in vec3 v_Normal;
out vec4 color;
const vec3 LightDirection = vec3(1.0, -1.0, -1.0);

void main() {
    vec3 N = normalize(v_Normal);
    vec3 L = normalize(-LightDirection);
    float LambertDiffuse = max(dot(N, L), 0.0);
    color = vec4(vec3(LambertDiffuse), 1.0);
}
"#;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A shader stage failed to compile, or the program failed to link.
///
/// `log` carries the driver's info log verbatim (trimmed).
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    Compile { stage: ShaderStage, log: String },
    Link { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { stage, log } => {
                write!(f, "{stage} shader failed to compile: {log}")
            }
            ShaderError::Link { log } => write!(f, "shader program failed to link: {log}"),
        }
    }
}

impl std::error::Error for ShaderError {}

/// Turns a raw info-log buffer into text. `written` is the length the driver
/// reported; trailing NULs and whitespace are dropped.
fn info_log_to_string(buf: &[u8], written: usize) -> String {
    let end = written.min(buf.len());
    String::from_utf8_lossy(&buf[..end])
        .trim_end_matches('\0')
        .trim()
        .to_string()
}

unsafe fn shader_info_log(shader: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len) };
    let mut buf = vec![0u8; len.max(1) as usize];
    let mut written: GLint = 0;
    unsafe {
        gl::GetShaderInfoLog(shader, buf.len() as GLint, &mut written, buf.as_mut_ptr() as *mut GLchar);
    }
    info_log_to_string(&buf, written.max(0) as usize)
}

unsafe fn program_info_log(program: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len) };
    let mut buf = vec![0u8; len.max(1) as usize];
    let mut written: GLint = 0;
    unsafe {
        gl::GetProgramInfoLog(program, buf.len() as GLint, &mut written, buf.as_mut_ptr() as *mut GLchar);
    }
    info_log_to_string(&buf, written.max(0) as usize)
}

/// Compiles one stage. On failure the driver's diagnostics are logged, the
/// shader object is deleted, and the log comes back in the error.
pub fn compile_stage(src: &str, stage: ShaderStage) -> Result<GLuint, ShaderError> {
    unsafe {
        let shader = gl::CreateShader(stage.gl_enum());
        let ptr = src.as_ptr() as *const GLchar;
        let len = src.len() as GLint;
        gl::ShaderSource(shader, 1, &ptr, &len);
        gl::CompileShader(shader);

        let mut status = 0;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        if status == 0 {
            let log = shader_info_log(shader);
            gl::DeleteShader(shader);
            log::error!("{stage} shader compile error: {log}");
            return Err(ShaderError::Compile { stage, log });
        }

        log::debug!("{stage} shader compiled (id {shader})");
        Ok(shader)
    }
}

/// Links two compiled stages. Both stage objects are deleted here whether or
/// not linking succeeds.
pub fn link_program(vs: GLuint, fs: GLuint) -> Result<ShaderProgram, ShaderError> {
    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vs);
        gl::AttachShader(program, fs);
        gl::LinkProgram(program);

        gl::DetachShader(program, vs);
        gl::DetachShader(program, fs);
        gl::DeleteShader(vs);
        gl::DeleteShader(fs);

        let mut status = 0;
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        if status == 0 {
            let log = program_info_log(program);
            gl::DeleteProgram(program);
            log::error!("shader link error: {log}");
            return Err(ShaderError::Link { log });
        }

        Ok(ShaderProgram::from_linked(program))
    }
}

/// A linked GL program with its uniform locations cached by name.
///
/// Dropping it deletes the program; a current GL context is required.
#[derive(Debug)]
pub struct ShaderProgram {
    id: GLuint,
    uniforms: HashMap<&'static str, GLint>,
}

impl ShaderProgram {
    /// Compiles both stages and links them.
    pub fn build(vs_src: &str, fs_src: &str) -> Result<Self, ShaderError> {
        let vs = compile_stage(vs_src, ShaderStage::Vertex)?;
        let fs = match compile_stage(fs_src, ShaderStage::Fragment) {
            Ok(fs) => fs,
            Err(err) => {
                unsafe { gl::DeleteShader(vs) };
                return Err(err);
            }
        };
        link_program(vs, fs)
    }

    fn from_linked(id: GLuint) -> Self {
        let mut uniforms = HashMap::with_capacity(FRAME_UNIFORMS.len());
        for name in FRAME_UNIFORMS {
            let location = unsafe { uniform_location(id, name) };
            if location < 0 {
                // Unused uniforms get optimized out; writes to -1 are ignored by GL.
                log::warn!("uniform `{name}` not active in program {id}");
            }
            uniforms.insert(name, location);
        }
        log::debug!("shader program {id} linked, uniforms: {uniforms:?}");
        Self { id, uniforms }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) };
    }

    /// Uploads a column-major 4x4 matrix. The program must be bound.
    pub fn set_uniform_matrix4(&self, name: &str, matrix: &[f32; 16]) {
        let location = match self.uniforms.get(name) {
            Some(&location) => location,
            None => unsafe { uniform_location(self.id, name) },
        };
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, matrix.as_ptr()) };
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) };
        log::debug!("shader program {} released", self.id);
    }
}

unsafe fn uniform_location(program: GLuint, name: &str) -> GLint {
    match CString::new(name) {
        Ok(cname) => unsafe { gl::GetUniformLocation(program, cname.as_ptr()) },
        Err(_) => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_trims_driver_padding() {
        let raw = b"0:3(1): error: syntax error, unexpected '}'\n\0\0\0";
        assert_eq!(
            info_log_to_string(raw, raw.len()),
            "0:3(1): error: syntax error, unexpected '}'"
        );
    }

    #[test]
    fn info_log_respects_written_length() {
        let raw = b"ERROR: 0:1: bad tokenGARBAGE";
        assert_eq!(info_log_to_string(raw, 21), "ERROR: 0:1: bad token");
        assert_eq!(info_log_to_string(raw, 999), "ERROR: 0:1: bad tokenGARBAGE");
        assert_eq!(info_log_to_string(raw, 0), "");
    }

    #[test]
    fn compile_error_names_stage_and_driver_text() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:4(5): error: `colr' undeclared".to_string(),
        };
        let text = err.to_string();
        assert!(text.starts_with("fragment shader failed to compile"));
        assert!(text.contains("`colr' undeclared"));
    }

    #[test]
    fn link_error_display() {
        let err = ShaderError::Link { log: "no main".to_string() };
        assert_eq!(err.to_string(), "shader program failed to link: no main");
    }

    #[test]
    fn stage_maps_to_gl_enum() {
        assert_eq!(ShaderStage::Vertex.gl_enum(), gl::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_enum(), gl::FRAGMENT_SHADER);
    }

    #[test]
    fn sources_declare_frame_uniforms_and_attributes() {
        for name in FRAME_UNIFORMS {
            assert!(VERTEX_SHADER_SRC.contains(&format!("uniform mat4 {name};")));
        }
        assert!(VERTEX_SHADER_SRC.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER_SRC.starts_with("#version 330 core"));
        assert!(VERTEX_SHADER_SRC.contains("layout(location = 0) in vec3 position;"));
        assert!(VERTEX_SHADER_SRC.contains("layout(location = 1) in vec3 normal;"));
        assert!(FRAGMENT_SHADER_SRC.contains("vec3(1.0, -1.0, -1.0)"));
        assert!(FRAGMENT_SHADER_SRC.contains("out vec4 color;"));
    }
}
