use bevy::prelude::*;

/// Something a flicker controller can drive. Write-only: controllers never read back.
pub trait LightSink {
    fn set_intensity(&mut self, intensity: f32);
    fn set_color(&mut self, color: Color);
}

/// Intensity is in lumens.
impl LightSink for PointLight {
    fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Intensity is in lumens.
impl LightSink for SpotLight {
    fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Directional lights have no lumen output, so intensity maps to illuminance (lux).
impl LightSink for DirectionalLight {
    fn set_intensity(&mut self, intensity: f32) {
        self.illuminance = intensity;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl<T: LightSink> LightSink for Mut<'_, T> {
    fn set_intensity(&mut self, intensity: f32) {
        (**self).set_intensity(intensity);
    }

    fn set_color(&mut self, color: Color) {
        (**self).set_color(color);
    }
}

/// Discards everything, for controllers that have no light to drive.
impl LightSink for () {
    fn set_intensity(&mut self, _intensity: f32) {}

    fn set_color(&mut self, _color: Color) {}
}

/// Query data used to look up the light components on a sink entity.
pub type LightQueryData = (
    Option<&'static mut PointLight>,
    Option<&'static mut SpotLight>,
    Option<&'static mut DirectionalLight>,
);

/// The light components found on one entity, written together.
pub struct BoundLight<'a> {
    pub point: Option<Mut<'a, PointLight>>,
    pub spot: Option<Mut<'a, SpotLight>>,
    pub directional: Option<Mut<'a, DirectionalLight>>,
}

impl BoundLight<'_> {
    /// True when the entity carries at least one light.
    pub fn is_bound(&self) -> bool {
        self.point.is_some() || self.spot.is_some() || self.directional.is_some()
    }
}

type LightItem<'a> = (
    Option<Mut<'a, PointLight>>,
    Option<Mut<'a, SpotLight>>,
    Option<Mut<'a, DirectionalLight>>,
);

impl<'a> From<LightItem<'a>> for BoundLight<'a> {
    fn from((point, spot, directional): LightItem<'a>) -> Self {
        Self { point, spot, directional }
    }
}

impl LightSink for BoundLight<'_> {
    fn set_intensity(&mut self, intensity: f32) {
        if let Some(point) = self.point.as_mut() {
            point.set_intensity(intensity);
        }
        if let Some(spot) = self.spot.as_mut() {
            spot.set_intensity(intensity);
        }
        if let Some(directional) = self.directional.as_mut() {
            directional.set_intensity(intensity);
        }
    }

    fn set_color(&mut self, color: Color) {
        if let Some(point) = self.point.as_mut() {
            point.set_color(color);
        }
        if let Some(spot) = self.spot.as_mut() {
            spot.set_color(color);
        }
        if let Some(directional) = self.directional.as_mut() {
            directional.set_color(color);
        }
    }
}
