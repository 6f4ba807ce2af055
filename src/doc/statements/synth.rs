/*!
# `SYNTH`

## Purpose
Play the keyboard synthesizer.

## Remarks
Keys `A` to `L` are white keys, `W E T Z U O P` black keys. An empty
line or Ctrl-C quits.

## Example
```text
SYNTH
```

*/
