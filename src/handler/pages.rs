//! Embedded page documents
//!
//! The HTML/CSS/JS payloads served for `/` and `/index.html`, stored as
//! compile-time constants and shared read-only by all request handlers.
//! Camera permission handling, face detection and face matching all run in
//! the end user's browser; the server only returns these bytes verbatim.

use crate::config::PageVariant;

/// Resolve the document for a configured page variant
pub const fn for_variant(variant: PageVariant) -> &'static str {
    match variant {
        PageVariant::Webcam => WEBCAM_PAGE,
        PageVariant::FaceDetect => FACE_DETECT_PAGE,
    }
}

/// Webcam monitor page: requests camera access and mirrors the stream
pub const WEBCAM_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Webcam Monitor</title>
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #121212;
            color: #e0e0e0;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            height: 100vh;
            margin: 0;
            overflow: hidden;
        }
        .container {
            background-color: #1e1e1e;
            padding: 25px;
            border-radius: 12px;
            box-shadow: 0 8px 32px rgba(0,0,0,0.6);
            text-align: center;
            width: 90%;
            max-width: 720px;
            border: 1px solid #333;
        }
        h1 { margin-bottom: 20px; font-size: 1.5rem; color: #fff; }
        .video-wrapper {
            width: 100%;
            background: #000;
            border-radius: 8px;
            overflow: hidden;
            position: relative;
            aspect-ratio: 16/9;
            display: flex;
            align-items: center;
            justify-content: center;
            border: 2px solid #333;
        }
        video {
            width: 100%;
            height: 100%;
            object-fit: cover;
            transform: scaleX(-1);
        }
        .status {
            margin-top: 20px;
            padding: 12px;
            border-radius: 6px;
            font-weight: bold;
            font-size: 0.95rem;
        }
        .status.loading { background-color: #0277bd; color: white; }
        .status.success { background-color: #2e7d32; color: white; }
        .status.error { background-color: #c62828; color: white; }
        #retryBtn {
            margin-top: 15px;
            padding: 10px 20px;
            background-color: #444;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            display: none;
        }
        #retryBtn:hover { background-color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Webcam Monitor</h1>
        <div class="video-wrapper">
            <video id="webcam" autoplay playsinline muted></video>
        </div>
        <div id="statusMessage" class="status loading">
            Initializing camera...
        </div>
        <button id="retryBtn" onclick="startWebcam()">Try Again</button>
    </div>
    <script>
        const videoElement = document.getElementById('webcam');
        const statusElement = document.getElementById('statusMessage');
        const retryBtn = document.getElementById('retryBtn');

        async function startWebcam() {
            statusElement.className = 'status loading';
            statusElement.textContent = 'Requesting camera permission...';
            retryBtn.style.display = 'none';
            try {
                const stream = await navigator.mediaDevices.getUserMedia({
                    video: {
                        width: { ideal: 1280 },
                        height: { ideal: 720 },
                        facingMode: 'user'
                    },
                    audio: false
                });
                videoElement.srcObject = stream;
                statusElement.textContent = 'Camera connected.';
                statusElement.className = 'status success';
            } catch (error) {
                console.error('Webcam error:', error);
                let msg = 'Unknown error.';
                if (error.name === 'NotAllowedError' || error.name === 'PermissionDeniedError') {
                    msg = 'Access denied! You need to click Allow in the browser.';
                } else if (error.name === 'NotFoundError' || error.name === 'DevicesNotFoundError') {
                    msg = 'No webcam detected.';
                } else if (error.name === 'NotReadableError' || error.name === 'TrackStartError') {
                    msg = 'The camera is already in use by another application.';
                } else if (window.isSecureContext === false) {
                    msg = 'Security error: the browser blocked the camera because the site is not using HTTPS.';
                } else {
                    msg = 'Failed to open camera: ' + error.message;
                }
                statusElement.textContent = msg;
                statusElement.className = 'status error';
                retryBtn.style.display = 'inline-block';
            }
        }
        window.addEventListener('load', startWebcam);
    </script>
</body>
</html>
"##;

/// Webcam monitor page that additionally loads face-api.js from a public
/// CDN and runs in-browser face detection plus matching against a captured
/// reference face. No frame or descriptor ever leaves the browser.
pub const FACE_DETECT_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Webcam Monitor - Face Detection</title>
    <script src="https://cdn.jsdelivr.net/npm/face-api.js@0.22.2/dist/face-api.min.js"></script>
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #121212;
            color: #e0e0e0;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            height: 100vh;
            margin: 0;
            overflow: hidden;
        }
        .container {
            background-color: #1e1e1e;
            padding: 25px;
            border-radius: 12px;
            box-shadow: 0 8px 32px rgba(0,0,0,0.6);
            text-align: center;
            width: 90%;
            max-width: 720px;
            border: 1px solid #333;
        }
        h1 { margin-bottom: 20px; font-size: 1.5rem; color: #fff; }
        .video-wrapper {
            width: 100%;
            background: #000;
            border-radius: 8px;
            overflow: hidden;
            position: relative;
            aspect-ratio: 16/9;
            border: 2px solid #333;
        }
        video, canvas {
            position: absolute;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
            transform: scaleX(-1);
        }
        canvas { z-index: 1; }
        .status {
            margin-top: 20px;
            padding: 12px;
            border-radius: 6px;
            font-weight: bold;
            font-size: 0.95rem;
        }
        .status.loading { background-color: #0277bd; color: white; }
        .status.success { background-color: #2e7d32; color: white; }
        .status.error { background-color: #c62828; color: white; }
        button {
            margin-top: 15px;
            padding: 10px 20px;
            background-color: #444;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }
        button:hover { background-color: #666; }
        #retryBtn { display: none; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Webcam Monitor - Face Detection</h1>
        <div class="video-wrapper">
            <video id="webcam" autoplay playsinline muted></video>
            <canvas id="overlay"></canvas>
        </div>
        <div id="statusMessage" class="status loading">
            Loading face detection models...
        </div>
        <button id="captureBtn" onclick="captureReference()" disabled>Capture Reference Face</button>
        <button id="retryBtn" onclick="start()">Try Again</button>
    </div>
    <script>
        const MODEL_URL = 'https://cdn.jsdelivr.net/gh/justadudewhohacks/face-api.js@0.22.2/weights';
        const MATCH_THRESHOLD = 0.6;

        const videoElement = document.getElementById('webcam');
        const overlay = document.getElementById('overlay');
        const statusElement = document.getElementById('statusMessage');
        const captureBtn = document.getElementById('captureBtn');
        const retryBtn = document.getElementById('retryBtn');

        let faceMatcher = null;

        function setStatus(kind, text) {
            statusElement.className = 'status ' + kind;
            statusElement.textContent = text;
        }

        async function loadModels() {
            setStatus('loading', 'Loading face detection models...');
            await faceapi.nets.tinyFaceDetector.loadFromUri(MODEL_URL);
            await faceapi.nets.faceLandmark68Net.loadFromUri(MODEL_URL);
            await faceapi.nets.faceRecognitionNet.loadFromUri(MODEL_URL);
        }

        async function startWebcam() {
            setStatus('loading', 'Requesting camera permission...');
            const stream = await navigator.mediaDevices.getUserMedia({
                video: {
                    width: { ideal: 1280 },
                    height: { ideal: 720 },
                    facingMode: 'user'
                },
                audio: false
            });
            videoElement.srcObject = stream;
            await new Promise(resolve => videoElement.onloadedmetadata = resolve);
        }

        async function captureReference() {
            const detection = await faceapi
                .detectSingleFace(videoElement, new faceapi.TinyFaceDetectorOptions())
                .withFaceLandmarks()
                .withFaceDescriptor();
            if (!detection) {
                setStatus('error', 'No face visible to capture. Try again.');
                return;
            }
            const labeled = new faceapi.LabeledFaceDescriptors('reference', [detection.descriptor]);
            faceMatcher = new faceapi.FaceMatcher([labeled], MATCH_THRESHOLD);
            setStatus('success', 'Reference face captured. Matching...');
        }

        async function detectLoop() {
            const options = new faceapi.TinyFaceDetectorOptions();
            const displaySize = { width: overlay.width, height: overlay.height };
            const ctx = overlay.getContext('2d');

            setInterval(async () => {
                const detections = await faceapi
                    .detectAllFaces(videoElement, options)
                    .withFaceLandmarks()
                    .withFaceDescriptors();

                ctx.clearRect(0, 0, overlay.width, overlay.height);
                const resized = faceapi.resizeResults(detections, displaySize);

                for (const detection of resized) {
                    const box = detection.detection.box;
                    let label = 'face';
                    if (faceMatcher) {
                        const match = faceMatcher.findBestMatch(detection.descriptor);
                        label = match.label === 'reference' ? 'match' : 'unknown';
                    }
                    const drawBox = new faceapi.draw.DrawBox(box, { label: label });
                    drawBox.draw(overlay);
                }

                if (!faceMatcher) {
                    if (detections.length === 0) {
                        setStatus('loading', 'No face detected.');
                    } else {
                        setStatus('success', detections.length + ' face(s) detected.');
                    }
                }
            }, 200);
        }

        async function start() {
            retryBtn.style.display = 'none';
            try {
                await loadModels();
                await startWebcam();
                overlay.width = videoElement.videoWidth;
                overlay.height = videoElement.videoHeight;
                captureBtn.disabled = false;
                setStatus('success', 'Camera connected. Detecting faces...');
                detectLoop();
            } catch (error) {
                console.error('Startup error:', error);
                let msg = 'Unknown error.';
                if (error.name === 'NotAllowedError' || error.name === 'PermissionDeniedError') {
                    msg = 'Access denied! You need to click Allow in the browser.';
                } else if (error.name === 'NotFoundError' || error.name === 'DevicesNotFoundError') {
                    msg = 'No webcam detected.';
                } else if (error.name === 'NotReadableError' || error.name === 'TrackStartError') {
                    msg = 'The camera is already in use by another application.';
                } else if (window.isSecureContext === false) {
                    msg = 'Security error: the browser blocked the camera because the site is not using HTTPS.';
                } else {
                    msg = 'Startup failed: ' + error.message;
                }
                setStatus('error', msg);
                retryBtn.style.display = 'inline-block';
            }
        }
        window.addEventListener('load', start);
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_pages_are_html_documents() {
        assert!(WEBCAM_PAGE.starts_with("<!DOCTYPE html>"));
        assert!(FACE_DETECT_PAGE.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_webcam_page_requests_camera() {
        assert!(WEBCAM_PAGE.contains("navigator.mediaDevices.getUserMedia"));
        // The plain variant must not pull in the face detection library
        assert!(!WEBCAM_PAGE.contains("face-api"));
    }

    #[test]
    fn test_face_detect_page_loads_library_from_cdn() {
        assert!(FACE_DETECT_PAGE.contains("navigator.mediaDevices.getUserMedia"));
        assert!(FACE_DETECT_PAGE.contains("face-api.min.js"));
        assert!(FACE_DETECT_PAGE.contains("loadFromUri(MODEL_URL)"));
    }

    #[test]
    fn test_for_variant_mapping() {
        assert_eq!(for_variant(PageVariant::Webcam), WEBCAM_PAGE);
        assert_eq!(for_variant(PageVariant::FaceDetect), FACE_DETECT_PAGE);
    }
}
