//! Entry point for wireview: CLI flags, logging, exit-code mapping.

use std::process::ExitCode;

use corelib::error::ViewerError;

const DEFAULT_MESH_PATH: &str = "model.obj";

fn parse_backend_arg() -> wgpu::Backends {
    // Accept: --gpu-backend=auto|vulkan|dx12|metal|gl
    let mut backends = wgpu::Backends::all(); // default = auto
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--gpu-backend=") {
            backends = match val.to_ascii_lowercase().as_str() {
                "auto" => wgpu::Backends::all(),
                "vulkan" | "vk" => wgpu::Backends::VULKAN,
                "dx12" | "d3d12" => wgpu::Backends::DX12,
                "metal" | "mtl" => wgpu::Backends::METAL,
                "gl" | "opengl" | "gles" => wgpu::Backends::GL,
                other => {
                    log::warn!("Unknown backend '{}', falling back to auto.", other);
                    wgpu::Backends::all()
                }
            };
        }
    }
    backends
}

fn parse_mesh_path_arg() -> String {
    // First non-flag argument is the OBJ path.
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .unwrap_or_else(|| DEFAULT_MESH_PATH.to_string())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let backends = parse_backend_arg();
    let mesh_path = parse_mesh_path_arg();
    log::info!(
        "Starting wireview. Backend: {:?}, mesh: {}",
        backends,
        mesh_path
    );

    match run(&mesh_path, backends) {
        Ok(()) => {
            log::info!("Graceful shutdown. Bye!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(mesh_path: &str, backends: wgpu::Backends) -> Result<(), ViewerError> {
    // Load and flatten before any window or GPU resource exists; a bad path
    // must fail without touching the GPU.
    let mesh = asset::obj::load_obj_from_path(mesh_path)
        .map_err(|err| ViewerError::MeshLoad(format!("{err:#}")))?;
    let flat = mesh.flatten();
    log::info!(
        "Loaded {}: {} triangles, {} vertices after flattening",
        mesh_path,
        mesh.triangle_count(),
        flat.vertex_count()
    );

    platform::run_viewer(flat, backends)
}
