//! Declarative projection tables for the W3C webrtc-stats report types.
//!
//! Pure data: field selections, metric names, kinds and label schemas per
//! report type. Metric names here carry no namespace; the collector facade
//! prepends it when rendering. Changing a label list changes the identity of
//! every metric the projection emits, so additions go at the end of the
//! field tables and label lists stay frozen.

use super::registry::{FieldSpec, MetricKind, ProjectionRule, ReportProjection, ValueKind};

const fn int_counter(
    source_key: &'static str,
    metric_name: &'static str,
    help: &'static str,
) -> FieldSpec {
    FieldSpec {
        source_key,
        metric_name,
        kind: MetricKind::Counter,
        value: ValueKind::Int,
        help,
    }
}

const fn float_counter(
    source_key: &'static str,
    metric_name: &'static str,
    help: &'static str,
) -> FieldSpec {
    FieldSpec {
        source_key,
        metric_name,
        kind: MetricKind::Counter,
        value: ValueKind::Float,
        help,
    }
}

const fn int_gauge(
    source_key: &'static str,
    metric_name: &'static str,
    help: &'static str,
) -> FieldSpec {
    FieldSpec {
        source_key,
        metric_name,
        kind: MetricKind::Gauge,
        value: ValueKind::Int,
        help,
    }
}

const fn float_gauge(
    source_key: &'static str,
    metric_name: &'static str,
    help: &'static str,
) -> FieldSpec {
    FieldSpec {
        source_key,
        metric_name,
        kind: MetricKind::Gauge,
        value: ValueKind::Float,
        help,
    }
}

const RTP_STREAM_LABEL_KEYS: &[&str] = &["id", "kind", "ssrc", "transportId", "codecId"];
const RTP_STREAM_LABEL_NAMES: &[&str] = &["id", "kind", "ssrc", "transport_id", "codec_id"];
const REMOTE_RTP_STREAM_LABEL_KEYS: &[&str] = &["id", "kind", "ssrc", "transportId", "localId"];
const REMOTE_RTP_STREAM_LABEL_NAMES: &[&str] = &["id", "kind", "ssrc", "transport_id", "local_id"];

const OUTBOUND_RTP_FIELDS: &[FieldSpec] = &[
    int_counter(
        "packetsSent",
        "outbound_rtp_packets_sent_total",
        "Total number of RTP packets sent for this SSRC.",
    ),
    int_counter(
        "bytesSent",
        "outbound_rtp_bytes_sent_total",
        "Total number of payload bytes sent for this SSRC.",
    ),
    int_counter(
        "headerBytesSent",
        "outbound_rtp_header_bytes_sent_total",
        "Total number of RTP header and padding bytes sent for this SSRC.",
    ),
    int_counter(
        "retransmittedPacketsSent",
        "outbound_rtp_retransmitted_packets_sent_total",
        "Total number of retransmitted packets sent for this SSRC.",
    ),
    int_counter(
        "retransmittedBytesSent",
        "outbound_rtp_retransmitted_bytes_sent_total",
        "Total number of retransmitted bytes sent for this SSRC.",
    ),
    float_gauge(
        "targetBitrate",
        "outbound_rtp_target_bitrate_bits_per_second",
        "Current target bitrate of the encoder.",
    ),
    int_counter(
        "framesEncoded",
        "outbound_rtp_frames_encoded_total",
        "Total number of frames successfully encoded.",
    ),
    int_counter(
        "keyFramesEncoded",
        "outbound_rtp_key_frames_encoded_total",
        "Total number of key frames successfully encoded.",
    ),
    int_counter(
        "framesSent",
        "outbound_rtp_frames_sent_total",
        "Total number of frames sent on this RTP stream.",
    ),
    int_counter(
        "hugeFramesSent",
        "outbound_rtp_huge_frames_sent_total",
        "Total number of huge frames sent.",
    ),
    int_gauge(
        "frameWidth",
        "outbound_rtp_frame_width_pixels",
        "Width of the last encoded frame.",
    ),
    int_gauge(
        "frameHeight",
        "outbound_rtp_frame_height_pixels",
        "Height of the last encoded frame.",
    ),
    float_gauge(
        "framesPerSecond",
        "outbound_rtp_frames_per_second",
        "Number of encoded frames in the last second.",
    ),
    int_counter(
        "qpSum",
        "outbound_rtp_qp_sum_total",
        "Sum of QP values of encoded frames.",
    ),
    float_counter(
        "totalEncodeTime",
        "outbound_rtp_total_encode_time_seconds",
        "Total seconds spent encoding frames.",
    ),
    float_counter(
        "totalPacketSendDelay",
        "outbound_rtp_total_packet_send_delay_seconds",
        "Total seconds packets waited in the send buffer.",
    ),
    int_counter(
        "nackCount",
        "outbound_rtp_nack_count_total",
        "Total number of NACKs received for this SSRC.",
    ),
    int_counter(
        "firCount",
        "outbound_rtp_fir_count_total",
        "Total number of FIRs received for this SSRC.",
    ),
    int_counter(
        "pliCount",
        "outbound_rtp_pli_count_total",
        "Total number of PLIs received for this SSRC.",
    ),
    int_counter(
        "qualityLimitationResolutionChanges",
        "outbound_rtp_quality_limitation_resolution_changes_total",
        "Number of resolution changes due to quality limitation.",
    ),
];

const INBOUND_RTP_FIELDS: &[FieldSpec] = &[
    int_counter(
        "packetsReceived",
        "inbound_rtp_packets_received_total",
        "Total number of RTP packets received for this SSRC.",
    ),
    int_gauge(
        "packetsLost",
        "inbound_rtp_packets_lost",
        "Number of RTP packets lost for this SSRC; may be negative with duplicates.",
    ),
    float_gauge(
        "jitter",
        "inbound_rtp_jitter_seconds",
        "Packet jitter measured for this SSRC.",
    ),
    int_counter(
        "packetsDiscarded",
        "inbound_rtp_packets_discarded_total",
        "Total number of RTP packets discarded by the jitter buffer.",
    ),
    int_counter(
        "bytesReceived",
        "inbound_rtp_bytes_received_total",
        "Total number of payload bytes received for this SSRC.",
    ),
    int_counter(
        "headerBytesReceived",
        "inbound_rtp_header_bytes_received_total",
        "Total number of RTP header and padding bytes received for this SSRC.",
    ),
    int_counter(
        "fecPacketsReceived",
        "inbound_rtp_fec_packets_received_total",
        "Total number of FEC packets received for this SSRC.",
    ),
    int_counter(
        "fecPacketsDiscarded",
        "inbound_rtp_fec_packets_discarded_total",
        "Total number of FEC packets discarded for this SSRC.",
    ),
    int_counter(
        "framesDecoded",
        "inbound_rtp_frames_decoded_total",
        "Total number of frames correctly decoded.",
    ),
    int_counter(
        "keyFramesDecoded",
        "inbound_rtp_key_frames_decoded_total",
        "Total number of key frames correctly decoded.",
    ),
    int_counter(
        "framesReceived",
        "inbound_rtp_frames_received_total",
        "Total number of complete frames received on this RTP stream.",
    ),
    int_counter(
        "framesDropped",
        "inbound_rtp_frames_dropped_total",
        "Total number of frames dropped prior to decode.",
    ),
    int_gauge(
        "frameWidth",
        "inbound_rtp_frame_width_pixels",
        "Width of the last decoded frame.",
    ),
    int_gauge(
        "frameHeight",
        "inbound_rtp_frame_height_pixels",
        "Height of the last decoded frame.",
    ),
    float_gauge(
        "framesPerSecond",
        "inbound_rtp_frames_per_second",
        "Number of decoded frames in the last second.",
    ),
    int_counter(
        "qpSum",
        "inbound_rtp_qp_sum_total",
        "Sum of QP values of decoded frames.",
    ),
    float_counter(
        "totalDecodeTime",
        "inbound_rtp_total_decode_time_seconds",
        "Total seconds spent decoding frames.",
    ),
    float_counter(
        "jitterBufferDelay",
        "inbound_rtp_jitter_buffer_delay_seconds",
        "Sum of time each audio sample or video frame spent in the jitter buffer.",
    ),
    int_counter(
        "jitterBufferEmittedCount",
        "inbound_rtp_jitter_buffer_emitted_count_total",
        "Total number of samples or frames that came out of the jitter buffer.",
    ),
    int_counter(
        "totalSamplesReceived",
        "inbound_rtp_samples_received_total",
        "Total number of audio samples received on this RTP stream.",
    ),
    int_counter(
        "concealedSamples",
        "inbound_rtp_concealed_samples_total",
        "Total number of concealed audio samples.",
    ),
    int_counter(
        "silentConcealedSamples",
        "inbound_rtp_silent_concealed_samples_total",
        "Total number of concealed samples that were silent.",
    ),
    int_counter(
        "concealmentEvents",
        "inbound_rtp_concealment_events_total",
        "Total number of concealment events.",
    ),
    float_gauge(
        "audioLevel",
        "inbound_rtp_audio_level",
        "Audio level of the receiving track, from 0.0 to 1.0.",
    ),
    float_counter(
        "totalAudioEnergy",
        "inbound_rtp_total_audio_energy",
        "Total audio energy of the receiving track.",
    ),
    int_counter(
        "nackCount",
        "inbound_rtp_nack_count_total",
        "Total number of NACKs sent for this SSRC.",
    ),
    int_counter(
        "firCount",
        "inbound_rtp_fir_count_total",
        "Total number of FIRs sent for this SSRC.",
    ),
    int_counter(
        "pliCount",
        "inbound_rtp_pli_count_total",
        "Total number of PLIs sent for this SSRC.",
    ),
];

const REMOTE_INBOUND_RTP_FIELDS: &[FieldSpec] = &[
    float_gauge(
        "roundTripTime",
        "remote_inbound_rtp_round_trip_time_seconds",
        "Estimated round trip time reported by the remote endpoint.",
    ),
    float_counter(
        "totalRoundTripTime",
        "remote_inbound_rtp_total_round_trip_time_seconds",
        "Cumulative round trip time reported by the remote endpoint.",
    ),
    float_gauge(
        "fractionLost",
        "remote_inbound_rtp_fraction_lost",
        "Fraction of packets lost reported by the remote endpoint.",
    ),
    int_gauge(
        "packetsLost",
        "remote_inbound_rtp_packets_lost",
        "Number of packets lost reported by the remote endpoint.",
    ),
    float_gauge(
        "jitter",
        "remote_inbound_rtp_jitter_seconds",
        "Packet jitter reported by the remote endpoint.",
    ),
    int_counter(
        "reportsReceived",
        "remote_inbound_rtp_reports_received_total",
        "Total number of RTCP RR blocks received for this SSRC.",
    ),
    int_counter(
        "roundTripTimeMeasurements",
        "remote_inbound_rtp_round_trip_time_measurements_total",
        "Total number of RTCP RR blocks received with a valid round trip time.",
    ),
];

const REMOTE_OUTBOUND_RTP_FIELDS: &[FieldSpec] = &[
    int_counter(
        "packetsSent",
        "remote_outbound_rtp_packets_sent_total",
        "Total number of packets sent reported by the remote endpoint.",
    ),
    int_counter(
        "bytesSent",
        "remote_outbound_rtp_bytes_sent_total",
        "Total number of bytes sent reported by the remote endpoint.",
    ),
    int_counter(
        "reportsSent",
        "remote_outbound_rtp_reports_sent_total",
        "Total number of RTCP SR blocks sent by the remote endpoint.",
    ),
    float_gauge(
        "remoteTimestamp",
        "remote_outbound_rtp_remote_timestamp_milliseconds",
        "Remote timestamp of the most recent RTCP SR block.",
    ),
];

const MEDIA_SOURCE_FIELDS: &[FieldSpec] = &[
    int_gauge(
        "width",
        "media_source_width_pixels",
        "Width of the last frame originating from this source.",
    ),
    int_gauge(
        "height",
        "media_source_height_pixels",
        "Height of the last frame originating from this source.",
    ),
    int_counter(
        "frames",
        "media_source_frames_total",
        "Total number of frames originating from this source.",
    ),
    float_gauge(
        "framesPerSecond",
        "media_source_frames_per_second",
        "Number of frames originating from this source in the last second.",
    ),
    float_gauge(
        "audioLevel",
        "media_source_audio_level",
        "Audio level of the source, from 0.0 to 1.0.",
    ),
    float_counter(
        "totalAudioEnergy",
        "media_source_total_audio_energy",
        "Total audio energy of the source.",
    ),
    float_counter(
        "totalSamplesDuration",
        "media_source_total_samples_duration_seconds",
        "Total duration of audio samples produced by the source.",
    ),
    float_gauge(
        "echoReturnLoss",
        "media_source_echo_return_loss_decibels",
        "Echo return loss of the source.",
    ),
    float_gauge(
        "echoReturnLossEnhancement",
        "media_source_echo_return_loss_enhancement_decibels",
        "Echo return loss enhancement of the source.",
    ),
];

const PEER_CONNECTION_FIELDS: &[FieldSpec] = &[
    int_gauge(
        "dataChannelsOpened",
        "peer_connection_data_channels_opened",
        "Number of unique data channels that have entered the open state.",
    ),
    int_gauge(
        "dataChannelsClosed",
        "peer_connection_data_channels_closed",
        "Number of unique data channels that have left the open state.",
    ),
    int_gauge(
        "dataChannelsRequested",
        "peer_connection_data_channels_requested",
        "Number of data channels opened locally.",
    ),
    int_gauge(
        "dataChannelsAccepted",
        "peer_connection_data_channels_accepted",
        "Number of data channels opened by the remote peer.",
    ),
];

const DATA_CHANNEL_FIELDS: &[FieldSpec] = &[
    int_counter(
        "bytesSent",
        "datachannel_bytes_sent_total",
        "Total number of payload bytes sent on the data channel.",
    ),
    int_counter(
        "bytesReceived",
        "datachannel_bytes_received_total",
        "Total number of payload bytes received on the data channel.",
    ),
    int_counter(
        "messagesSent",
        "datachannel_messages_sent_total",
        "Total number of API messages sent on the data channel.",
    ),
    int_counter(
        "messagesReceived",
        "datachannel_messages_received_total",
        "Total number of API messages received on the data channel.",
    ),
];

const TRANSPORT_FIELDS: &[FieldSpec] = &[
    int_counter(
        "packetsSent",
        "transport_packets_sent_total",
        "Total number of packets sent over the transport.",
    ),
    int_counter(
        "packetsReceived",
        "transport_packets_received_total",
        "Total number of packets received over the transport.",
    ),
    int_counter(
        "bytesSent",
        "transport_bytes_sent_total",
        "Total number of payload bytes sent over the transport.",
    ),
    int_counter(
        "bytesReceived",
        "transport_bytes_received_total",
        "Total number of payload bytes received over the transport.",
    ),
    int_counter(
        "selectedCandidatePairChanges",
        "transport_selected_candidate_pair_changes_total",
        "Number of times the selected candidate pair changed.",
    ),
];

const SCTP_TRANSPORT_FIELDS: &[FieldSpec] = &[
    float_gauge(
        "smoothedRoundTripTime",
        "sctp_transport_smoothed_round_trip_time_seconds",
        "Latest smoothed round trip time of the SCTP association.",
    ),
    int_gauge(
        "congestionWindow",
        "sctp_transport_congestion_window_bytes",
        "Latest congestion window of the SCTP association.",
    ),
    int_gauge(
        "receiverWindow",
        "sctp_transport_receiver_window_bytes",
        "Latest receiver window of the SCTP association.",
    ),
    int_gauge(
        "mtu",
        "sctp_transport_mtu_bytes",
        "Latest maximum transmission unit of the SCTP association.",
    ),
    int_gauge(
        "unackData",
        "sctp_transport_unacknowledged_data_bytes",
        "Amount of unacknowledged data buffered for the SCTP association.",
    ),
];

const CANDIDATE_PAIR_FIELDS: &[FieldSpec] = &[
    int_counter(
        "packetsSent",
        "candidate_pair_packets_sent_total",
        "Total number of packets sent on the candidate pair.",
    ),
    int_counter(
        "packetsReceived",
        "candidate_pair_packets_received_total",
        "Total number of packets received on the candidate pair.",
    ),
    int_counter(
        "bytesSent",
        "candidate_pair_bytes_sent_total",
        "Total number of payload bytes sent on the candidate pair.",
    ),
    int_counter(
        "bytesReceived",
        "candidate_pair_bytes_received_total",
        "Total number of payload bytes received on the candidate pair.",
    ),
    float_counter(
        "totalRoundTripTime",
        "candidate_pair_total_round_trip_time_seconds",
        "Cumulative STUN round trip time measured on the candidate pair.",
    ),
    float_gauge(
        "currentRoundTripTime",
        "candidate_pair_current_round_trip_time_seconds",
        "Latest STUN round trip time measured on the candidate pair.",
    ),
    float_gauge(
        "availableOutgoingBitrate",
        "candidate_pair_available_outgoing_bitrate_bits_per_second",
        "Available outgoing bitrate estimated for the candidate pair.",
    ),
    float_gauge(
        "availableIncomingBitrate",
        "candidate_pair_available_incoming_bitrate_bits_per_second",
        "Available incoming bitrate estimated for the candidate pair.",
    ),
    int_counter(
        "requestsReceived",
        "candidate_pair_requests_received_total",
        "Total number of STUN connectivity check requests received.",
    ),
    int_counter(
        "requestsSent",
        "candidate_pair_requests_sent_total",
        "Total number of STUN connectivity check requests sent.",
    ),
    int_counter(
        "responsesReceived",
        "candidate_pair_responses_received_total",
        "Total number of STUN connectivity check responses received.",
    ),
    int_counter(
        "responsesSent",
        "candidate_pair_responses_sent_total",
        "Total number of STUN connectivity check responses sent.",
    ),
    int_counter(
        "consentRequestsSent",
        "candidate_pair_consent_requests_sent_total",
        "Total number of STUN consent requests sent.",
    ),
];

const LOCAL_CANDIDATE_FIELDS: &[FieldSpec] = &[
    int_gauge(
        "port",
        "local_candidate_port",
        "Port number of the local candidate.",
    ),
    int_gauge(
        "priority",
        "local_candidate_priority",
        "Priority of the local candidate.",
    ),
];

const REMOTE_CANDIDATE_FIELDS: &[FieldSpec] = &[
    int_gauge(
        "port",
        "remote_candidate_port",
        "Port number of the remote candidate.",
    ),
    int_gauge(
        "priority",
        "remote_candidate_priority",
        "Priority of the remote candidate.",
    ),
];

const ICE_SERVER_FIELDS: &[FieldSpec] = &[
    int_gauge("port", "ice_server_port", "Port number of the ICE server."),
    int_counter(
        "totalRequestsSent",
        "ice_server_requests_sent_total",
        "Total number of connectivity check requests sent to the ICE server.",
    ),
    int_counter(
        "totalResponsesReceived",
        "ice_server_responses_received_total",
        "Total number of connectivity check responses received from the ICE server.",
    ),
    float_counter(
        "totalRoundTripTime",
        "ice_server_total_round_trip_time_seconds",
        "Cumulative round trip time of connectivity checks to the ICE server.",
    ),
];

const CANDIDATE_LABEL_KEYS: &[&str] = &["id", "transportId", "address", "protocol", "candidateType"];
const CANDIDATE_LABEL_NAMES: &[&str] = &["id", "transport_id", "address", "protocol", "candidate_type"];

pub(super) const PROJECTIONS: &[ReportProjection] = &[
    ReportProjection {
        report_type: "codec",
        label_keys: super::catalog::CODEC_LABEL_NAMES,
        label_names: super::catalog::CODEC_LABEL_NAMES,
        rule: ProjectionRule::CodecInfo,
    },
    ReportProjection {
        report_type: "outbound-rtp",
        label_keys: RTP_STREAM_LABEL_KEYS,
        label_names: RTP_STREAM_LABEL_NAMES,
        rule: ProjectionRule::Fields(OUTBOUND_RTP_FIELDS),
    },
    ReportProjection {
        report_type: "inbound-rtp",
        label_keys: RTP_STREAM_LABEL_KEYS,
        label_names: RTP_STREAM_LABEL_NAMES,
        rule: ProjectionRule::Fields(INBOUND_RTP_FIELDS),
    },
    ReportProjection {
        report_type: "remote-inbound-rtp",
        label_keys: REMOTE_RTP_STREAM_LABEL_KEYS,
        label_names: REMOTE_RTP_STREAM_LABEL_NAMES,
        rule: ProjectionRule::Fields(REMOTE_INBOUND_RTP_FIELDS),
    },
    ReportProjection {
        report_type: "remote-outbound-rtp",
        label_keys: REMOTE_RTP_STREAM_LABEL_KEYS,
        label_names: REMOTE_RTP_STREAM_LABEL_NAMES,
        rule: ProjectionRule::Fields(REMOTE_OUTBOUND_RTP_FIELDS),
    },
    ReportProjection {
        report_type: "media-source",
        label_keys: &["id", "kind", "trackIdentifier"],
        label_names: &["id", "kind", "track_identifier"],
        rule: ProjectionRule::Fields(MEDIA_SOURCE_FIELDS),
    },
    ReportProjection {
        report_type: "peer-connection",
        label_keys: &["id"],
        label_names: &["id"],
        rule: ProjectionRule::Fields(PEER_CONNECTION_FIELDS),
    },
    ReportProjection {
        report_type: "data-channel",
        label_keys: &["id", "label"],
        label_names: &["id", "label"],
        rule: ProjectionRule::Fields(DATA_CHANNEL_FIELDS),
    },
    ReportProjection {
        report_type: "transport",
        label_keys: &["id", "iceRole", "dtlsState", "selectedCandidatePairId"],
        label_names: &["id", "ice_role", "dtls_state", "selected_candidate_pair_id"],
        rule: ProjectionRule::Fields(TRANSPORT_FIELDS),
    },
    ReportProjection {
        report_type: "sctp-transport",
        label_keys: &["id", "transportId"],
        label_names: &["id", "transport_id"],
        rule: ProjectionRule::Fields(SCTP_TRANSPORT_FIELDS),
    },
    ReportProjection {
        report_type: "candidate-pair",
        label_keys: &[
            "id",
            "transportId",
            "localCandidateId",
            "remoteCandidateId",
            "state",
        ],
        label_names: &[
            "id",
            "transport_id",
            "local_candidate_id",
            "remote_candidate_id",
            "state",
        ],
        rule: ProjectionRule::Fields(CANDIDATE_PAIR_FIELDS),
    },
    ReportProjection {
        report_type: "local-candidate",
        label_keys: CANDIDATE_LABEL_KEYS,
        label_names: CANDIDATE_LABEL_NAMES,
        rule: ProjectionRule::Fields(LOCAL_CANDIDATE_FIELDS),
    },
    ReportProjection {
        report_type: "remote-candidate",
        label_keys: CANDIDATE_LABEL_KEYS,
        label_names: CANDIDATE_LABEL_NAMES,
        rule: ProjectionRule::Fields(REMOTE_CANDIDATE_FIELDS),
    },
    // No numeric fields; listed so certificate reports are consumed silently
    // instead of falling into the unknown-type path.
    ReportProjection {
        report_type: "certificate",
        label_keys: &["id", "fingerprintAlgorithm"],
        label_names: &["id", "fingerprint_algorithm"],
        rule: ProjectionRule::Fields(&[]),
    },
    ReportProjection {
        report_type: "ice-server",
        label_keys: &["id", "url", "relayProtocol"],
        label_names: &["id", "url", "relay_protocol"],
        rule: ProjectionRule::Fields(ICE_SERVER_FIELDS),
    },
];
