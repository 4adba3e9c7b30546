//! WAV container writing and reading.
//!
//! Files are written as canonical 44-byte-header PCM WAV with no timestamps
//! or extra chunks, so the same PCM data always produces the same file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use wavforge_synth::{PcmFormat, MAX_CHANNELS, SAMPLE_WIDTH, SAMPLING_FREQ};

/// Size of the canonical RIFF/WAVE header.
pub const WAV_HEADER_LEN: usize = 44;

const WAVE_FORMAT_PCM: u16 = 1;
const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - PCM format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &PcmFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PCM data exceeds the 4 GiB WAV limit",
        )
    })?;
    let file_size = data_size.checked_add(36).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PCM data exceeds the 4 GiB WAV limit",
        )
    })?;
    let too_many_channels = || {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} channels do not fit a WAV header", format.channels),
        )
    };
    let block_align = format.block_align().ok_or_else(too_many_channels)?;
    let byte_rate = format.byte_rate().ok_or_else(too_many_channels)?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&WAVE_FORMAT_PCM.to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &PcmFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Writes a WAV file to disk, creating parent directories as needed.
pub fn write_wav_file(path: &Path, format: &PcmFormat, pcm_data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let bytes = write_wav_to_vec(format, pcm_data)?;
    fs::write(path, bytes)
}

/// Finds the body of the first chunk with the given id.
fn find_chunk<'a>(wav_data: &'a [u8], id: &[u8; 4]) -> Option<&'a [u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let body_start = pos + 8;
        let body_end = body_start.checked_add(chunk_size)?;
        if chunk_id == id {
            return wav_data.get(body_start..body_end);
        }

        pos = body_end;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// Extracts PCM data from a WAV file buffer.
///
/// # Returns
/// The `data` chunk body, or None if the buffer is not a RIFF/WAVE file or
/// the chunk is missing or truncated
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    find_chunk(wav_data, b"data")
}

/// Reads the format of a WAV file buffer.
///
/// Only integer PCM at 44100 Hz with 16-bit samples is accepted.
///
/// # Returns
/// The parsed format, or None if the `fmt ` chunk is missing, malformed or
/// describes a different profile
pub fn read_wav_format(wav_data: &[u8]) -> Option<PcmFormat> {
    let fmt = find_chunk(wav_data, b"fmt ")?;
    if fmt.len() < 16 {
        return None;
    }

    let mut audio_format = u16::from_le_bytes([fmt[0], fmt[1]]);
    let channels = u16::from_le_bytes([fmt[2], fmt[3]]);
    let sample_rate = u32::from_le_bytes([fmt[4], fmt[5], fmt[6], fmt[7]]);
    let bits_per_sample = u16::from_le_bytes([fmt[14], fmt[15]]);

    // WAVE_FORMAT_EXTENSIBLE stores the real format tag at the start of the sub-format GUID
    if audio_format == WAVE_FORMAT_EXTENSIBLE {
        audio_format = match fmt.get(24..26) {
            Some(tag) => u16::from_le_bytes([tag[0], tag[1]]),
            None => return None,
        };
    }

    if audio_format != WAVE_FORMAT_PCM
        || channels == 0
        || channels > MAX_CHANNELS
        || sample_rate != SAMPLING_FREQ
        || bits_per_sample != SAMPLE_WIDTH
    {
        return None;
    }

    Some(PcmFormat::with_channels(channels))
}
