use crate::core::VizConfig;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// WebAudio graph for one session: `<audio>` element source routed through
/// an analyser to the destination, plus the byte spectrum buffer the frame
/// loop reads once per frame.
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub analyser: web::AnalyserNode,
    pub media: web::HtmlAudioElement,
    pub spectrum: Rc<RefCell<Vec<u8>>>,
    // The source node must stay alive as long as the graph; dropping it
    // detaches the media element on some hosts.
    _source: web::MediaElementAudioSourceNode,
}

impl AudioGraph {
    /// Build the graph. Must run inside a user gesture so the context is
    /// allowed to start; hosts that still begin suspended are resumed
    /// explicitly.
    pub fn new(media: web::HtmlAudioElement, config: &VizConfig) -> anyhow::Result<Self> {
        let ctx =
            web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext error: {e:?}"))?;

        let analyser = web::AnalyserNode::new(&ctx)
            .map_err(|e| anyhow::anyhow!("AnalyserNode error: {e:?}"))?;
        analyser.set_fft_size(config.fft_size);
        // Wide decibel window so quiet material still registers.
        analyser.set_min_decibels(config.min_decibels);
        analyser.set_max_decibels(config.max_decibels);

        let source = ctx
            .create_media_element_source(&media)
            .map_err(|e| anyhow::anyhow!("media source error: {e:?}"))?;
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("connect error: {e:?}"))?;
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("connect error: {e:?}"))?;

        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }

        let bins = analyser.frequency_bin_count() as usize;
        log::info!("[audio] graph up, fft={} bins={}", config.fft_size, bins);
        Ok(Self {
            ctx,
            analyser,
            media,
            spectrum: Rc::new(RefCell::new(vec![0; bins])),
            _source: source,
        })
    }

    pub fn is_playing(&self) -> bool {
        !self.media.paused()
    }

    /// Refresh the spectrum buffer; returns false (buffer untouched) while
    /// playback is stopped.
    pub fn read_spectrum(&self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let mut buf = self.spectrum.borrow_mut();
        let bins = self.analyser.frequency_bin_count() as usize;
        if buf.len() != bins {
            buf.resize(bins, 0);
        }
        self.analyser.get_byte_frequency_data(&mut buf);
        true
    }

    /// Autoplay-unlock: some hosts keep the context suspended until a user
    /// interaction, so every play request resumes first.
    pub fn resume_if_suspended(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }
}
