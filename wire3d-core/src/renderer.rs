/// Scene renderer: transform, project and draw every instance's wireframe
use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::Model;
use crate::pipeline::{compose_camera_transform, compose_final_transform};
use crate::projection::{Point, Viewport};
use crate::raster::draw_wireframe_triangle;
use crate::scene::{Camera, Instance, Scene};
use crate::transform::{to_homogeneous, Matrix4x4};

/// Counters for one render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub instances: usize,
    pub triangles: usize,
}

/// Wireframe renderer. Stateless apart from its projection settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub viewport: Viewport,
}

impl Renderer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Transform and project every vertex of `model`, keeping the model's vertex order
    pub fn project_model(
        &self,
        model: &Model,
        transform: &Matrix4x4,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Vec<Point> {
        model
            .vertices()
            .iter()
            .map(|v| {
                let camera_space = transform * to_homogeneous(v);
                self.viewport.project(&camera_space, canvas_width, canvas_height)
            })
            .collect()
    }

    /// Draw `model` under the given model-to-camera transform. Returns the triangle count.
    pub fn render_model<C: Canvas + ?Sized>(
        &self,
        model: &Model,
        transform: &Matrix4x4,
        canvas: &mut C,
    ) -> usize {
        let projected = self.project_model(model, transform, canvas.width(), canvas.height());

        for triangle in model.triangles() {
            let [i0, i1, i2] = triangle.indices;
            debug_assert!(
                i0 < projected.len() && i1 < projected.len() && i2 < projected.len(),
                "triangle {:?} out of range for {} vertices",
                triangle.indices,
                projected.len()
            );
            log::trace!("triangle {:?} color {:?}", triangle.indices, triangle.color);

            draw_wireframe_triangle(
                canvas,
                projected[i0],
                projected[i1],
                projected[i2],
                triangle.color,
            );
        }

        model.triangles().len()
    }

    /// Draw every instance in list order. Later instances overwrite earlier ones.
    pub fn render_scene<C: Canvas + ?Sized>(
        &self,
        camera: &Camera,
        instances: &[Instance],
        canvas: &mut C,
    ) -> RenderStats {
        let camera_transform = compose_camera_transform(camera);
        let mut stats = RenderStats::default();

        for (index, instance) in instances.iter().enumerate() {
            if instance.is_transform_stale() {
                log::warn!("instance {index} changed without rebuild_transform; drawing the cached transform");
            }

            let transform = compose_final_transform(&camera_transform, instance);
            stats.triangles += self.render_model(instance.model(), &transform, canvas);
            stats.instances += 1;
        }

        log::debug!(
            "rendered {} instances, {} triangles into {}x{}",
            stats.instances,
            stats.triangles,
            canvas.width(),
            canvas.height()
        );
        stats
    }

    /// Render the whole scene, then present the canvas once
    pub fn render<C: Canvas + ?Sized>(&self, scene: &Scene, canvas: &mut C) -> Result<RenderStats> {
        let stats = self.render_scene(&scene.camera, &scene.instances, canvas);
        canvas.present()?;
        Ok(stats)
    }
}
