//! The interactive session: pick an initial image, then loop over the processing menu.

use crate::{
    config::Config,
    console::{Console, ConsoleResult},
    error::{ConsoleError, SessionError, SourceError},
    menu::{Action, Menu, SourceChoice, parse_choice},
    save,
    session::Session,
    viewer::{self, Presented, Preview, Viewer},
};
use camera::{CameraConfig, DeviceCamera, FrameGrabber};
use image::RgbImage;
use image_effect::{
    BoxBlurConfig, Channel, ChannelConfig, GrayscaleConfig, ImageEffect, RectangleConfig, to_luma,
};
use std::io::{self, BufRead, Write};

const RECTANGLE_PROMPTS: [&str; 4] = [
    "Top-left X: ",
    "Top-left Y: ",
    "Bottom-right X: ",
    "Bottom-right Y: ",
];

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user picked an exit entry.
    Exit,
    /// The initial image could not be loaded or captured.
    SourceFailed,
    /// Standard input reached its end.
    InputClosed,
}

/// Result of the source menu.
#[derive(Debug)]
pub enum Acquired {
    Image(RgbImage),
    Exit,
}

pub struct Controller<R, W> {
    console: Console<R, W>,
    config: Config,
    session: Session,
    viewer: Box<dyn Viewer>,
    camera: Box<dyn FrameGrabber>,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(console: Console<R, W>, config: Config) -> Self {
        let viewer = viewer::default_viewer(&config);
        let camera = DeviceCamera::new(CameraConfig::default().with_index(config.camera_index));

        Self {
            console,
            config,
            session: Session::new(),
            viewer,
            camera: Box::new(camera),
        }
    }

    pub fn with_viewer(mut self, viewer: impl Viewer + 'static) -> Self {
        self.viewer = Box::new(viewer);
        self
    }

    pub fn with_camera(mut self, camera: impl FrameGrabber + 'static) -> Self {
        self.camera = Box::new(camera);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Runs the whole session. Only failures of the console itself escape as errors.
    pub fn run(&mut self) -> io::Result<Outcome> {
        match self.drive() {
            Ok(outcome) => Ok(outcome),
            Err(ConsoleError::Closed) => {
                log::debug!("stdin closed");
                match self.console.say("Input closed, shutting down.") {
                    Ok(_) | Err(ConsoleError::Closed) => Ok(Outcome::InputClosed),
                    Err(ConsoleError::Io(e)) => Err(e),
                }
            }
            Err(ConsoleError::Io(e)) => Err(e),
        }
    }

    fn drive(&mut self) -> ConsoleResult<Outcome> {
        self.console
            .say("Program started. Welcome to the console image editor!")?;

        match self.acquire() {
            Ok(Acquired::Image(image)) => self.session = Session::with_image(image),
            Ok(Acquired::Exit) => {
                self.console.say("Shutting down...")?;
                return Ok(Outcome::Exit);
            }
            Err(SessionError::Source(e)) => {
                log::warn!("{e}");
                return Ok(Outcome::SourceFailed);
            }
            Err(SessionError::Console(e)) => return Err(e),
        }

        self.operation_loop()
    }

    /// Shows the source menu until an image is obtained or the user leaves.
    pub fn acquire(&mut self) -> Result<Acquired, SessionError> {
        loop {
            self.print_menu::<SourceChoice>()?;

            let answer = self.console.prompt(SourceChoice::PROMPT)?;
            match parse_choice::<SourceChoice>(&answer) {
                Ok(SourceChoice::File) => return self.load_from_file().map(Acquired::Image),
                Ok(SourceChoice::Camera) => return self.capture_from_camera().map(Acquired::Image),
                Ok(SourceChoice::Exit) => return Ok(Acquired::Exit),
                Err(e) => self.console.say(&e.message::<SourceChoice>())?,
            }
        }
    }

    fn load_from_file(&mut self) -> Result<RgbImage, SessionError> {
        let path = loop {
            let answer = self.console.prompt("Enter image path: ")?;
            let path = cutil::fs::normalize_user_path(&answer);

            if path.exists() {
                break path;
            }

            self.console
                .say(&format!("Error: file '{}' not found!", path.display()))?;
        };

        match image::open(&path) {
            Ok(image) => {
                let image = image.to_rgb8();
                self.console.say(&format!(
                    "Image loaded. Size: {}x{}",
                    image.width(),
                    image.height()
                ))?;
                Ok(image)
            }
            Err(source) => {
                self.console
                    .say("Error: could not load image. Check the file format.")?;
                Err(SourceError::Decode { path, source }.into())
            }
        }
    }

    fn capture_from_camera(&mut self) -> Result<RgbImage, SessionError> {
        self.console.say("Capturing a frame from the camera...")?;

        match self.camera.grab() {
            Ok(frame) => {
                self.console.say(&format!(
                    "Camera image captured. Size: {}x{}",
                    frame.width(),
                    frame.height()
                ))?;
                Ok(frame)
            }
            Err(e) => {
                if e.is_unavailable() {
                    self.console.say("Error: camera not found!")?;
                } else {
                    self.console.say("Error capturing image from camera!")?;
                }
                Err(SourceError::Camera(e).into())
            }
        }
    }

    fn operation_loop(&mut self) -> ConsoleResult<Outcome> {
        loop {
            self.print_menu::<Action>()?;

            let answer = self.console.prompt(Action::PROMPT)?;
            let action = match parse_choice::<Action>(&answer) {
                Ok(action) => action,
                Err(e) => {
                    self.console.say(&e.message::<Action>())?;
                    continue;
                }
            };

            log::debug!("action: {action:?}");
            match action {
                Action::ShowChannel => self.show_channel()?,
                Action::Blur => self.apply_blur()?,
                Action::Grayscale => self.grayscale()?,
                Action::Rectangle => self.draw_rectangle()?,
                Action::Save => self.save()?,
                Action::Reset => self.reset()?,
                Action::Exit => {
                    self.console.say("Shutting down...")?;
                    return Ok(Outcome::Exit);
                }
            }
        }
    }

    fn show_channel(&mut self) -> ConsoleResult<()> {
        let answer = self.console.prompt("Choose channel (R, G, B): ")?;
        let channel = match answer.parse::<Channel>() {
            Ok(channel) => channel,
            Err(e) => {
                log::debug!("{e}");
                return self.console.say("Invalid channel choice!");
            }
        };

        let Some(current) = self.session.current() else {
            return self.console.say("No image loaded!");
        };

        match ImageEffect::IsolateChannel(ChannelConfig::new(channel)).render(current) {
            Ok(isolated) => {
                self.console.say(&format!("Showing {channel} channel."))?;
                let title = format!("{channel} Channel");
                Self::display(
                    &mut *self.viewer,
                    &mut self.console,
                    &title,
                    Preview::Color(&isolated),
                )
            }
            Err(e) => self.console.say(&format!("Error: {e}")),
        }
    }

    fn apply_blur(&mut self) -> ConsoleResult<()> {
        let Some((width, height)) = self.session.current().map(|image| image.dimensions()) else {
            return self.console.say("No image loaded!");
        };
        let max = BoxBlurConfig::max_kernel_size(width, height) as i64;

        let kernel_size = loop {
            let answer = self
                .console
                .prompt("Enter kernel size (odd number >= 3): ")?;

            match answer.trim().parse::<i64>() {
                Ok(k) if BoxBlurConfig::is_valid_kernel_size(k) && k > max => self
                    .console
                    .say(&format!("Kernel size must not exceed {max} for this image!"))?,
                Ok(k) if BoxBlurConfig::is_valid_kernel_size(k) => break k as u32,
                Ok(_) => self
                    .console
                    .say("Kernel size must be an odd number >= 3!")?,
                Err(_) => self.console.say("Error: enter an integer!")?,
            }
        };

        let effect = ImageEffect::BoxBlur(BoxBlurConfig::new().with_kernel_size(kernel_size));
        if self.transform(effect)? {
            self.console.say(&format!(
                "Applied averaging filter with kernel {kernel_size}x{kernel_size}"
            ))?;
            self.display_current("Averaged Image")?;
        }

        Ok(())
    }

    fn grayscale(&mut self) -> ConsoleResult<()> {
        let Some(gray) = self.session.current().map(to_luma) else {
            return self.console.say("No image loaded!");
        };

        if self.transform(ImageEffect::Grayscale(GrayscaleConfig::new()))? {
            self.console.say("Image converted to grayscale")?;
            Self::display(
                &mut *self.viewer,
                &mut self.console,
                "Grayscale Image",
                Preview::Gray(&gray),
            )?;
        }

        Ok(())
    }

    fn draw_rectangle(&mut self) -> ConsoleResult<()> {
        let mut coords = [0i32; 4];
        for (slot, prompt) in coords.iter_mut().zip(RECTANGLE_PROMPTS) {
            let answer = self.console.prompt(prompt)?;
            match answer.trim().parse::<i32>() {
                Ok(value) => *slot = value,
                Err(_) => return self.console.say("Error: coordinates must be integers!"),
            }
        }

        let [x1, y1, x2, y2] = coords;
        let effect = ImageEffect::Rectangle(
            RectangleConfig::new((x1, y1), (x2, y2))
                .with_color(self.config.annotation_color)
                .with_thickness(self.config.annotation_thickness),
        );

        if self.transform(effect)? {
            self.console
                .say(&format!("Drew rectangle ({x1},{y1})-({x2},{y2})"))?;
            self.display_current("Image with Rectangle")?;
        }

        Ok(())
    }

    fn save(&mut self) -> ConsoleResult<()> {
        if !self.session.has_image() {
            return self.console.say("No image to save!");
        }

        let answer = self.console.prompt(&format!(
            "Enter file name (default {}): ",
            self.config.default_save_name
        ))?;
        let name = save::output_file_name(&answer, &self.config.default_save_name);

        let Some(current) = self.session.current() else {
            return self.console.say("No image to save!");
        };

        match save::save_image(current, &self.config.output_dir, &name) {
            Ok(path) => self
                .console
                .say(&format!("Image saved as {}", path.display())),
            Err(e) => self.console.say(&format!("Error while saving: {e}")),
        }
    }

    fn reset(&mut self) -> ConsoleResult<()> {
        if self.session.reset() {
            self.console.say("Image reset to original")
        } else {
            self.console.say("No image loaded!")
        }
    }

    /// Runs `effect` on a copy of the current image and keeps the copy on success.
    fn transform(&mut self, effect: ImageEffect) -> ConsoleResult<bool> {
        let Some(current) = self.session.current() else {
            self.console.say("No image loaded!")?;
            return Ok(false);
        };

        match effect.render(current) {
            Ok(image) => {
                self.session.replace(image);
                Ok(true)
            }
            Err(e) => {
                self.console.say(&format!("Error: {e}"))?;
                Ok(false)
            }
        }
    }

    fn display_current(&mut self, title: &str) -> ConsoleResult<()> {
        match self.session.current() {
            Some(current) => Self::display(
                &mut *self.viewer,
                &mut self.console,
                title,
                Preview::Color(current),
            ),
            None => Ok(()),
        }
    }

    fn display(
        viewer: &mut dyn Viewer,
        console: &mut Console<R, W>,
        title: &str,
        preview: Preview<'_>,
    ) -> ConsoleResult<()> {
        match viewer.show(title, preview) {
            Ok(Presented::Window) => Ok(()),
            Ok(Presented::Skipped) => {
                let (width, height) = preview.dimensions();
                console.say(&format!(
                    "Preview '{title}' ({width}x{height}) skipped: no window support in this build"
                ))
            }
            Err(e) => {
                log::warn!("{title}: {e}");
                console.say(&format!("Display error: {e}"))
            }
        }
    }

    fn print_menu<M: Menu>(&mut self) -> ConsoleResult<()> {
        for line in M::lines() {
            self.console.say(&line)?;
        }
        Ok(())
    }
}
