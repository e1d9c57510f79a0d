//! Build profiles and the fixed artifact manifest.
//!
//! The set of model weights baked into a worker image is selected by a
//! coarse build profile: `minimal` ships no weights, `standard` ships the
//! FLUX.1-dev essentials, and `full` adds Qwen-Image, ControlNet, and
//! upscaler weights on top. The sets are hand-coded constants; there is no
//! manifest file format.

use std::fmt;
use std::str::FromStr;

/// Coarse selector for which artifact set a build fetches.
///
/// Inclusion is a total order: minimal ⊂ standard ⊂ full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildProfile {
    /// No model weights; the image is provisioned at runtime.
    Minimal,
    /// FLUX.1-dev checkpoint, VAE, and text encoders.
    #[default]
    Standard,
    /// Everything in standard plus Qwen-Image, ControlNet, and upscalers.
    Full,
}

impl FromStr for BuildProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "full" => Ok(Self::Full),
            _ => Err(format!("unknown build profile: {}", s)),
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Full => "full",
        };
        write!(f, "{}", name)
    }
}

/// Destination subdirectory for a model artifact, mirroring the ComfyUI
/// model folder layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Checkpoints,
    Vae,
    TextEncoders,
    DiffusionModels,
    Controlnet,
    UpscaleModels,
}

impl Category {
    /// Directory name under the models root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Checkpoints => "checkpoints",
            Self::Vae => "vae",
            Self::TextEncoders => "text_encoders",
            Self::DiffusionModels => "diffusion_models",
            Self::Controlnet => "controlnet",
            Self::UpscaleModels => "upscale_models",
        }
    }

    /// All known categories, in display order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Checkpoints,
            Self::Vae,
            Self::TextEncoders,
            Self::DiffusionModels,
            Self::Controlnet,
            Self::UpscaleModels,
        ]
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.dir_name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Category::all().iter().map(|c| c.dir_name()).collect();
                format!("unknown category '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// A single remote artifact: a file within a Hugging Face repository and
/// the local category it lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactRef {
    /// Hugging Face repository id (e.g. "Comfy-Org/flux1-dev").
    pub repo: &'static str,
    /// File name within the repository.
    pub file: &'static str,
    /// Destination category under the models root.
    pub category: Category,
}

/// Essential weights fetched for standard and full builds.
const ESSENTIAL_ARTIFACTS: &[ArtifactRef] = &[
    ArtifactRef {
        repo: "Comfy-Org/flux1-dev",
        file: "flux1-dev-fp8.safetensors",
        category: Category::Checkpoints,
    },
    ArtifactRef {
        repo: "black-forest-labs/FLUX.1-dev",
        file: "ae.safetensors",
        category: Category::Vae,
    },
    ArtifactRef {
        repo: "comfyanonymous/flux_text_encoders",
        file: "clip_l.safetensors",
        category: Category::TextEncoders,
    },
    ArtifactRef {
        repo: "comfyanonymous/flux_text_encoders",
        file: "t5xxl_fp8_e4m3fn.safetensors",
        category: Category::TextEncoders,
    },
];

/// Additional weights fetched only for full builds.
const FULL_EXTRA_ARTIFACTS: &[ArtifactRef] = &[
    ArtifactRef {
        repo: "Comfy-Org/Qwen-Image_ComfyUI",
        file: "qwen_image_fp8_e4m3fn.safetensors",
        category: Category::DiffusionModels,
    },
    ArtifactRef {
        repo: "Comfy-Org/Qwen-Image_ComfyUI",
        file: "qwen_image_vae.safetensors",
        category: Category::Vae,
    },
    ArtifactRef {
        repo: "Shakker-Labs/FLUX.1-dev-ControlNet-Union-Pro",
        file: "diffusion_pytorch_model_promax_fp8.safetensors",
        category: Category::Controlnet,
    },
    ArtifactRef {
        repo: "philz1337x/upscaler",
        file: "4x-UltraSharp.pth",
        category: Category::UpscaleModels,
    },
];

/// Resolve the artifact set for a build profile.
///
/// The mapping is a fixed, deterministic function of the profile.
pub fn artifacts_for(profile: BuildProfile) -> Vec<ArtifactRef> {
    match profile {
        BuildProfile::Minimal => Vec::new(),
        BuildProfile::Standard => ESSENTIAL_ARTIFACTS.to_vec(),
        BuildProfile::Full => {
            let mut set = ESSENTIAL_ARTIFACTS.to_vec();
            set.extend_from_slice(FULL_EXTRA_ARTIFACTS);
            set
        }
    }
}
