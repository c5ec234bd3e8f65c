use super::helpers;
use crate::core::SurfaceSize;
use wgpu;

/// Per-size attachments for the scene pass.
///
/// - `msaa_view` is the multisampled colour target, resolved into the
///   swapchain image each frame. Absent when rendering without MSAA.
/// - `depth_view` matches the colour target's sample count.
pub(crate) struct RenderTargets {
    pub(crate) msaa_view: Option<wgpu::TextureView>,
    pub(crate) depth_view: wgpu::TextureView,
    // owners of the views above
    _textures: Vec<wgpu::Texture>,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        size: SurfaceSize,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let mut textures = Vec::with_capacity(2);
        let msaa_view = (sample_count > 1).then(|| {
            let (tex, view) = helpers::create_attachment_texture(
                device,
                "msaa_color",
                size.width,
                size.height,
                color_format,
                sample_count,
            );
            textures.push(tex);
            view
        });
        let (depth_tex, depth_view) = helpers::create_attachment_texture(
            device,
            "depth_tex",
            size.width,
            size.height,
            helpers::DEPTH_FORMAT,
            sample_count,
        );
        textures.push(depth_tex);
        Self {
            msaa_view,
            depth_view,
            _textures: textures,
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, size: SurfaceSize) {
        *self = Self::new(device, size, self.color_format, self.sample_count);
    }
}
