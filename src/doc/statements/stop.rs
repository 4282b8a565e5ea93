/*!
# `STOP`

## Purpose
Pause the program.

## Remarks
Typically used for debugging. Variables can be inspected in direct
mode, then `CONT` resumes with the next line. Pressing CTRL-C while
a program runs does the same thing.

## Example
```text
10 PRINT 1
20 STOP
30 PRINT 2
RUN
1
CONT
2
```

*/
